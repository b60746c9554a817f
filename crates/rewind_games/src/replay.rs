//! Non-interactive replay of a move sequence.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameHistory, Player, Position, SortOrder};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Plays `cells` in order, then views `jump` if given.
///
/// Unlike the terminal UI, a scripted sequence stops at the first rejected
/// move and reports it.
#[instrument]
pub fn replay(cells: &[Position], jump: Option<usize>, sort_order: SortOrder) -> Result<GameHistory> {
    let mut game = GameHistory::with_sort_order(sort_order);

    for (n, pos) in cells.iter().enumerate() {
        game.play(*pos)
            .with_context(|| format!("Move {} ({}) rejected", n + 1, pos))?;
    }
    if let Some(move_number) = jump {
        game.jump_to(move_number)?;
    }

    info!(moves = game.len() - 1, current_move = game.current_move(), "Replay finished");
    Ok(game)
}

/// Board, status and move list as plain text.
pub fn render_text(game: &GameHistory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.current_board());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", game.status());
    let _ = writeln!(out);
    let _ = writeln!(out, "[{}]", game.sort_order().action_label());
    for entry in game.entries() {
        let _ = writeln!(out, "{:>2}. {}", entry.move_number(), entry);
    }
    out
}

/// One move-list line in a [`ReplayReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Snapshot index.
    pub move_number: usize,
    /// Rendered label.
    pub label: String,
    /// Whether selecting the entry jumps to it.
    pub jump_target: bool,
}

/// Serializable view of a game for `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Viewed board in row-major order; `null` for empty cells.
    pub cells: Vec<Option<Player>>,
    /// Status text, e.g. `Next player: O`.
    pub status: String,
    /// Winner of the viewed board, if any.
    pub winner: Option<Player>,
    /// Viewed move.
    pub current_move: usize,
    /// Number of snapshots.
    pub history_len: usize,
    /// Move list order.
    pub sort_order: SortOrder,
    /// Label of the sort toggle.
    pub sort_action: String,
    /// Move list in display order.
    pub entries: Vec<EntryReport>,
}

impl From<&GameHistory> for ReplayReport {
    fn from(game: &GameHistory) -> Self {
        let status = game.status();
        Self {
            cells: game
                .current_board()
                .squares()
                .iter()
                .map(|square| square.player())
                .collect(),
            status: status.to_string(),
            winner: status.winner(),
            current_move: game.current_move(),
            history_len: game.len(),
            sort_order: game.sort_order(),
            sort_action: game.sort_order().action_label().to_string(),
            entries: game
                .entries()
                .iter()
                .map(|entry| EntryReport {
                    move_number: entry.move_number(),
                    label: entry.to_string(),
                    jump_target: entry.is_jump_target(),
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON of a [`ReplayReport`].
pub fn render_json(game: &GameHistory) -> Result<String> {
    serde_json::to_string_pretty(&ReplayReport::from(game)).context("Failed to serialize replay")
}
