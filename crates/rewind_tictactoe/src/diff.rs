//! Locating the mark added between two consecutive snapshots.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on the board, as recovered from two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Zero-based row of the new mark.
    pub row: usize,
    /// Zero-based column of the new mark.
    pub col: usize,
    /// The mark that was placed.
    pub mark: Player,
}

impl Placement {
    /// Board position of the placement; `None` if row or column is past 2.
    pub fn position(&self) -> Option<Position> {
        Position::from_row_col(self.row, self.col)
    }
}

/// Finds the first square, in index order, that is empty in `previous` and
/// occupied in `board`.
///
/// Returns `None` when no square went from empty to occupied, which is the
/// case for the initial board.
#[instrument(skip(board, previous))]
pub fn diff(board: &Board, previous: &Board) -> Option<Placement> {
    Position::ALL.into_iter().find_map(|pos| {
        match (previous.get(pos), board.get(pos)) {
            (Square::Empty, Square::Occupied(mark)) => Some(Placement {
                row: pos.row(),
                col: pos.col(),
                mark,
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boards_have_no_diff() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(diff(&board, &board), None);
        assert_eq!(diff(&Board::new(), &Board::new()), None);
    }

    #[test]
    fn test_single_placement() {
        let previous = Board::new().with_mark(Position::TopLeft, Player::X);
        let board = previous.with_mark(Position::MiddleRight, Player::O);
        let placement = diff(&board, &previous).unwrap();
        assert_eq!(placement.row, 1);
        assert_eq!(placement.col, 2);
        assert_eq!(placement.mark, Player::O);
        assert_eq!(placement.position(), Some(Position::MiddleRight));
    }

    #[test]
    fn test_first_changed_cell_in_index_order() {
        let board = Board::new()
            .with_mark(Position::BottomRight, Player::X)
            .with_mark(Position::TopCenter, Player::O);
        let placement = diff(&board, &Board::new()).unwrap();
        assert_eq!(placement.position(), Some(Position::TopCenter));
    }

    #[test]
    fn test_removed_mark_is_ignored() {
        let previous = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(diff(&Board::new(), &previous), None);
    }
}
