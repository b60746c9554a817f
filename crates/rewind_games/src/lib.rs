//! Rewind front end - terminal play and scripted replay of time-travel
//! tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: optional `rewind.toml` plus command-line overrides
//! - **TUI**: board, move list and status drawn with ratatui
//! - **Replay**: play a cell sequence and print the result as text or JSON
//!
//! All game rules live in [`rewind_tictactoe`]; this crate only draws state
//! and forwards commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{AppConfig, ConfigError, LogConfig};
