//! End-to-end tests for scripted replay output.

use clap::Parser;
use rewind_games::replay::{ReplayReport, render_json, render_text, replay};
use rewind_games::{AppConfig, Cli, Command};
use rewind_tictactoe::{Player, Position, SortOrder};
use std::io::Write;

fn cells(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .filter_map(|i| Position::from_index(*i))
        .collect()
}

#[test]
fn test_winning_replay_text() {
    let game = replay(&cells(&[0, 1, 4, 2, 8]), None, SortOrder::Ascending).unwrap();

    let expected = "\
X|O|O
-+-+-
4|X|6
-+-+-
7|8|X

Winner: X

[Sort DESC]
 0. Go to game start
 1. Go to move # 1 (X in [0, 0])
 2. Go to move # 2 (O in [0, 1])
 3. Go to move # 3 (X in [1, 1])
 4. Go to move # 4 (O in [0, 2])
 5. Current move #5
";
    assert_eq!(render_text(&game), expected);
}

#[test]
fn test_descending_replay_with_jump() {
    let game = replay(&cells(&[0, 1]), Some(0), SortOrder::Descending).unwrap();
    let text = render_text(&game);

    assert!(text.starts_with("1|2|3\n"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("[Sort ASC]\n 2. Go to move # 2 (O in [0, 1])\n"));
    assert!(text.ends_with(" 0. Current move #0\n"));
}

#[test]
fn test_json_report() {
    let game = replay(&cells(&[4, 0]), None, SortOrder::Ascending).unwrap();
    let json: serde_json::Value = serde_json::from_str(&render_json(&game).unwrap()).unwrap();

    assert_eq!(json["cells"][0], "O");
    assert_eq!(json["cells"][4], "X");
    assert!(json["cells"][8].is_null());
    assert_eq!(json["status"], "Next player: X");
    assert!(json["winner"].is_null());
    assert_eq!(json["sort_order"], "ascending");
    assert_eq!(json["entries"][2]["label"], "Current move #2");
    assert_eq!(json["entries"][2]["jump_target"], false);
}

#[test]
fn test_report_for_win() {
    let game = replay(&cells(&[2, 0, 4, 1, 6]), None, SortOrder::Ascending).unwrap();
    let report = ReplayReport::from(&game);
    assert_eq!(report.winner, Some(Player::X));
    assert_eq!(report.status, "Winner: X");
}

#[test]
fn test_cli_and_config_together() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_order = \"descending\"\n\n[log]\nfilter = \"debug\"").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["rewind", "--config", &path, "replay", "4"]).unwrap();
    let config = AppConfig::load(cli.config.as_deref()).unwrap();
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.log().filter(), "debug");

    let Command::Replay { cells, sort, .. } = cli.command else {
        panic!("Expected replay command");
    };
    let config = config.with_sort_order(sort);
    let game = replay(&cells, None, *config.sort_order()).unwrap();
    assert_eq!(game.entries()[0].to_string(), "Current move #1");
}
