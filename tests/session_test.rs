//! Tests for the terminal play loop, driven by scripted input.

use std::io::Cursor;

use tempfile::{NamedTempFile, TempDir};

use tictactoe_stats::{GameStatus, Player, Session, StatsStore};

fn setup_test_db() -> (NamedTempFile, StatsStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    (db_file, StatsStore::new(db_path))
}

/// Runs a session over the given input lines and returns its output.
fn run_script(store: StatsStore, script: &str) -> String {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), store);
    session.run().expect("Session failed");
    String::from_utf8(session.into_output()).expect("Output is not UTF-8")
}

#[test]
fn test_quit_immediately() {
    let (_db, store) = setup_test_db();
    let output = run_script(store.clone(), "q\n");

    assert!(output.contains("Welcome to Tic Tac Toe!"));
    assert!(output.contains("Player X, enter position (1-9) or 'q' to quit: "));
    assert!(output.contains("Thanks for playing! Goodbye!"));

    let agg = store.get_aggregate_statistics().expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 0);
}

#[test]
fn test_end_of_input_quits() {
    let (_db, store) = setup_test_db();
    let output = run_script(store, "5\n");
    assert!(output.contains("Player O, enter position"));
    assert!(output.contains("Thanks for playing! Goodbye!"));
}

#[test]
fn test_win_is_recorded_once() {
    let (_db, store) = setup_test_db();
    // X takes the top row; then view stats, continue, and quit from the menu.
    let script = "1\n4\n2\n5\n3\n2\n\n3\n";
    let output = run_script(store.clone(), script);

    assert!(output.contains("Player X wins!"));
    assert!(output.contains("Total Games Played: 1"));
    assert!(output.contains("Player X: 100.0%"));

    let agg = store.get_aggregate_statistics().expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 1);
    assert_eq!(*agg.x_wins(), 1);
}

#[test]
fn test_play_again_records_each_game() {
    let (_db, store) = setup_test_db();
    // Game 1: X wins the top row. Game 2: a draw.
    let script = "1\n4\n2\n5\n3\n1\n1\n2\n3\n5\n4\n6\n8\n7\n9\n3\n";
    let output = run_script(store.clone(), script);

    assert!(output.contains("Player X wins!"));
    assert!(output.contains("It's a draw!"));

    let agg = store.get_aggregate_statistics().expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 2);
    assert_eq!(*agg.x_wins(), 1);
    assert_eq!(*agg.draws(), 1);

    let history = store.recent_games(10).expect("History failed");
    let moves: Vec<i32> = history.iter().map(|g| *g.moves_count()).collect();
    assert!(moves.contains(&5));
    assert!(moves.contains(&9));
}

#[test]
fn test_invalid_input_reprompts_same_player() {
    let (_db, store) = setup_test_db();
    let script = "abc\n0\n10\n5\n5\nq\n";
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), store);
    session.run().expect("Session failed");

    assert_eq!(session.game().current_player(), Player::O);
    assert_eq!(session.game().moves_played(), 1);

    let output = String::from_utf8(session.into_output()).expect("Output is not UTF-8");
    assert!(output.contains("Invalid input! Please enter a number between 1 and 9."));
    assert!(output.contains("Invalid position! Please enter a number between 1 and 9."));
    assert!(output.contains("That position is already taken! Choose another position."));
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let (_db, store) = setup_test_db();
    let script = "1\n4\n2\n5\n3\n9\n3\n";
    let output = run_script(store, script);
    assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
    assert!(output.ends_with("Thanks for playing! Goodbye!\n"));
}

#[test]
fn test_unavailable_store_does_not_block_play() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("stats.db");
    let store = StatsStore::new(path.to_str().expect("Invalid path"));

    // Win, fail to save, view stats, then start a new game and quit.
    let script = "1\n4\n2\n5\n3\n2\n\n1\nq\n";
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), store);
    session.run().expect("Session failed");

    assert_eq!(session.game().status(), GameStatus::InProgress);
    assert_eq!(session.game().moves_played(), 0);

    let output = String::from_utf8(session.into_output()).expect("Output is not UTF-8");
    assert!(output.contains("Could not save game result: storage unavailable"));
    assert!(output.contains("Statistics unavailable."));
}
