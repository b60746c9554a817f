//! Rejected operations on the game history.

use super::{Player, Position};

/// A move that cannot be played on the viewed board.
///
/// Rejection leaves the history untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The cell index is outside the 3x3 board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OffBoard(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a completed line.
    #[display("Game is already won by {}", _0)]
    GameDecided(Player),
}

impl std::error::Error for IllegalMove {}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move {} is out of range (history has {} entries)", requested, len)]
pub struct OutOfRange {
    /// The requested move number.
    pub requested: usize,
    /// Length of the history at the time of the request.
    pub len: usize,
}

impl std::error::Error for OutOfRange {}
