//! Time-travel game history.
//!
//! [`GameHistory`] owns every board snapshot played along the active branch
//! and the index of the snapshot being viewed. Playing from an earlier
//! snapshot discards the snapshots after it.

use super::diff::diff;
use super::entry::{EntryLabel, HistoryEntry};
use super::error::{IllegalMove, OutOfRange};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[strum(to_string = "ascending", serialize = "asc")]
    Ascending,
    /// Latest move first.
    #[strum(to_string = "descending", serialize = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the control that switches away from this order.
    pub fn action_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort DESC",
            SortOrder::Descending => "Sort ASC",
        }
    }
}

/// Ordered board snapshots plus the viewed move.
///
/// Invariants:
/// - `boards` is never empty and `boards[0]` is the empty board.
/// - `current_move < boards.len()`.
/// - `boards[n]` adds exactly one mark to `boards[n - 1]`, placed by
///   [`Player::for_move`]`(n - 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) boards: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a fresh history that lists moves in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            boards: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// Plays `moves` in order from the initial board.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Places the next player's mark at `pos` on the viewed board.
    ///
    /// Snapshots after the viewed one are discarded, the new board is
    /// appended and becomes the viewed one.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameDecided`] if the viewed board has a winner.
    /// - [`IllegalMove::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.next_player()))]
    pub fn play(&mut self, pos: Position) -> Result<(), IllegalMove> {
        let board = *self.current_board();

        if let Some(winner) = check_winner(&board) {
            debug!(%winner, "Rejected move on decided board");
            return Err(IllegalMove::GameDecided(winner));
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return Err(IllegalMove::SquareOccupied(pos));
        }

        let next = board.with_mark(pos, self.next_player());
        let discarded = self.boards.len() - (self.current_move + 1);
        if discarded > 0 {
            info!(discarded, "Branching from earlier move, discarding later snapshots");
        }
        self.boards.truncate(self.current_move + 1);
        self.boards.push(next);
        self.current_move = self.boards.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after play"
        );
        Ok(())
    }

    /// Plays by raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`IllegalMove::OffBoard`] for indices past 8, otherwise as [`Self::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<(), IllegalMove> {
        let pos = Position::from_index(index).ok_or(IllegalMove::OffBoard(index))?;
        self.play(pos)
    }

    /// Views the snapshot at `move_number` without changing the history.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `move_number >= self.len()`.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), OutOfRange> {
        if move_number >= self.boards.len() {
            warn!("Jump target outside recorded history");
            return Err(OutOfRange {
                requested: move_number,
                len: self.boards.len(),
            });
        }
        self.current_move = move_number;
        Ok(())
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self), fields(from = %self.sort_order))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    /// Starts over from the empty board, keeping the sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_sort_order(self.sort_order);
    }

    /// The viewed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// All snapshots in chronological order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Index of the viewed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Number of snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// True when the viewed snapshot is the latest one.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.boards.len()
    }

    /// Player who moves next from the viewed snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.next_player())
        }
    }

    /// Move list entries in display order.
    #[instrument(skip(self), fields(sort_order = %self.sort_order))]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> =
            (0..self.boards.len()).map(|n| self.entry(n)).collect();
        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    fn entry(&self, move_number: usize) -> HistoryEntry {
        let label = if move_number == self.current_move {
            EntryLabel::Current
        } else if move_number == 0 {
            EntryLabel::GameStart
        } else {
            match diff(&self.boards[move_number], &self.boards[move_number - 1]) {
                Some(placement) => EntryLabel::Move(placement),
                None => {
                    warn!(move_number, "Snapshot adds no mark to its predecessor");
                    EntryLabel::GameStart
                }
            }
        };
        HistoryEntry::new(move_number, label)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
