//! Rewind Tic-Tac-Toe - pure game logic with a time-travel move history.
//!
//! The crate owns everything a front end needs to play tic-tac-toe and to
//! revisit earlier positions:
//!
//! - **Board**: immutable 3x3 snapshots, replaced rather than mutated.
//! - **Rules**: win and draw detection over the eight fixed lines.
//! - **Diff**: which cell changed between two consecutive snapshots.
//! - **History**: the snapshot list, the viewed move, and the display order
//!   of the move list.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameStatus, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.play(Position::TopLeft).unwrap();
//! game.play(Position::Center).unwrap();
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status(), GameStatus::NextTurn(Player::X));
//! assert_eq!(game.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod diff;
mod entry;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use diff::{Placement, diff};
pub use entry::{EntryLabel, HistoryEntry};
pub use error::{IllegalMove, OutOfRange};
pub use history::{GameHistory, SortOrder};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
