//! Rewind - tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_games::{AppConfig, Cli, Command, OutputFormat, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may be set there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { sort } => {
            let config = config.with_sort_order(sort);
            logging::init_file_logging(config.log())?;
            info!(sort_order = %config.sort_order(), "Config loaded");
            tui::run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            sort,
            format,
        } => {
            logging::init_stderr_logging(config.log());
            let sort_order = sort.unwrap_or(*config.sort_order());
            info!(moves = cells.len(), %sort_order, "Replaying moves");

            let game = replay::replay(&cells, jump, sort_order)?;
            match format {
                OutputFormat::Text => print!("{}", replay::render_text(&game)),
                OutputFormat::Json => println!("{}", replay::render_json(&game)?),
            }
            Ok(())
        }
    }
}
