//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use rewind_tictactoe::{Position, SortOrder};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Move list order (ascending or descending)
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Play a sequence of cells and print the resulting position
    Replay {
        /// Cells to play in order: 0-8 or a label such as "center"
        #[arg(value_parser = parse_position)]
        cells: Vec<Position>,

        /// Move number to view after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Move list order (ascending or descending)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text board and move list
    Text,
    /// JSON document
    Json,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}
