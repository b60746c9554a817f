//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use rewind_tictactoe::{GameHistory, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// The result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    /// Index into `game.entries()` (display order).
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        let mut app = Self {
            game: GameHistory::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
        };
        app.select_current();
        app
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Transition::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Transition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    /// Plays the next mark at `pos`; a rejected move only updates the message.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        let player = self.game.next_player();
        match self.game.play(pos) {
            Ok(()) => {
                debug!(%player, position = %pos, "Move applied to UI state");
                self.message = Some(format!("{} played {}", player, pos.label()));
                self.select_current();
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Jumps to the selected move-list entry.
    #[instrument(skip(self), fields(selected = self.selected))]
    pub fn jump_to_selected(&mut self) {
        let Some(entry) = self.game.entries().get(self.selected).copied() else {
            warn!("Selection outside move list");
            self.select_current();
            return;
        };

        if !entry.is_jump_target() {
            self.message = Some(format!("Already viewing move #{}", entry.move_number()));
            return;
        }

        match self.game.jump_to(entry.move_number()) {
            Ok(()) => {
                self.message = Some(format!("Viewing move #{}", entry.move_number()));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Flips the move-list order, keeping the same move selected.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.game.toggle_sort();
        self.selected = self.game.len() - 1 - self.selected;
    }

    /// Starts a new game with the current sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.message = Some("Game restarted. Player X's turn.".to_string());
        self.select_current();
    }

    /// Points the selection at the viewed move.
    fn select_current(&mut self) {
        self.selected = match self.game.sort_order() {
            SortOrder::Ascending => self.game.current_move(),
            SortOrder::Descending => self.game.len() - 1 - self.game.current_move(),
        };
    }
}
