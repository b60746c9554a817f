//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are checked in debug builds after
//! each [`GameHistory::play`].

use super::{Board, GameHistory, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// History is non-empty and starts from the empty board.
pub struct RootedAtEmptyBoard;

impl Invariant<GameHistory> for RootedAtEmptyBoard {
    fn holds(game: &GameHistory) -> bool {
        game.boards.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// The viewed move indexes an existing snapshot.
pub struct CursorInBounds;

impl Invariant<GameHistory> for CursorInBounds {
    fn holds(game: &GameHistory) -> bool {
        game.current_move < game.boards.len()
    }

    fn description() -> &'static str {
        "Current move lies within the history"
    }
}

/// Each snapshot adds exactly one mark, placed by the player whose turn it was.
pub struct SingleMarkPerStep;

impl Invariant<GameHistory> for SingleMarkPerStep {
    fn holds(game: &GameHistory) -> bool {
        game.boards.windows(2).enumerate().all(|(n, pair)| {
            let [previous, board] = pair else {
                return false;
            };
            let mut changed = previous
                .squares()
                .iter()
                .zip(board.squares())
                .filter(|(before, after)| before != after);

            match (changed.next(), changed.next()) {
                (Some((Square::Empty, Square::Occupied(mark))), None) => {
                    *mark == Player::for_move(n)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark of the player to move"
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (RootedAtEmptyBoard, CursorInBounds, SingleMarkPerStep);
