//! Labels for the move list.

use super::diff::Placement;
use serde::Serialize;
use std::fmt;

/// What a move-list entry shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryLabel {
    /// The viewed move; shown as plain text, not a jump target.
    Current,
    /// The initial empty board.
    GameStart,
    /// A move, described by the mark it added.
    Move(Placement),
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    move_number: usize,
    label: EntryLabel,
}

impl HistoryEntry {
    /// Creates an entry for `move_number`.
    pub fn new(move_number: usize, label: EntryLabel) -> Self {
        Self { move_number, label }
    }

    /// Index of the snapshot this entry refers to.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// What the entry shows.
    pub fn label(&self) -> EntryLabel {
        self.label
    }

    /// Whether selecting the entry should jump to its move.
    pub fn is_jump_target(&self) -> bool {
        self.label != EntryLabel::Current
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            EntryLabel::Current => write!(f, "Current move #{}", self.move_number),
            EntryLabel::GameStart => f.write_str("Go to game start"),
            EntryLabel::Move(Placement { row, col, mark }) => write!(
                f,
                "Go to move # {} ({} in [{}, {}])",
                self.move_number, mark, row, col
            ),
        }
    }
}
