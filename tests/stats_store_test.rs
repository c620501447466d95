//! Tests for the statistics store.

use strum::IntoEnumIterator;
use tempfile::{NamedTempFile, TempDir};

use tictactoe_stats::{GameState, Outcome, PlayerAggregate, StatsErrorKind, StatsStore};

/// Creates a temporary database file and a store pointing at it. The file
/// handle must stay in scope to keep the file alive.
fn setup_test_db() -> (NamedTempFile, StatsStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    (db_file, StatsStore::new(db_path))
}

#[test]
fn test_empty_store_aggregates_to_zero() {
    let (_db, store) = setup_test_db();
    let agg = store
        .get_aggregate_statistics()
        .expect("Aggregation failed");
    assert_eq!(agg, PlayerAggregate::new(0, 0, 0, 0));
    assert_eq!(agg.rate(Outcome::X), 0.0);
}

#[test]
fn test_record_game() {
    let (_db, store) = setup_test_db();
    let recorded = store.record_game(Outcome::X, 7).expect("Record failed");
    assert!(*recorded.id() > 0);
    assert_eq!(recorded.winner(), "X");
    assert_eq!(*recorded.moves_count(), 7);
    assert_eq!(recorded.parse_outcome().expect("Parse failed"), Outcome::X);
}

#[test]
fn test_each_record_adds_one_to_matching_bucket() {
    let (_db, store) = setup_test_db();

    for outcome in Outcome::iter() {
        let before = store.get_aggregate_statistics().expect("Aggregation failed");
        store.record_game(outcome, 9).expect("Record failed");
        let after = store.get_aggregate_statistics().expect("Aggregation failed");

        assert_eq!(*after.total_games(), *before.total_games() + 1);
        for other in Outcome::iter() {
            let expected = before.count(other) + u32::from(other == outcome);
            assert_eq!(after.count(other), expected, "{other} after recording {outcome}");
        }
    }
}

#[test]
fn test_get_aggregate_statistics() {
    let (_db, store) = setup_test_db();

    let outcomes = [(Outcome::X, 3), (Outcome::O, 1), (Outcome::Draw, 2)];
    for (outcome, count) in outcomes {
        for _ in 0..count {
            store.record_game(outcome, 5).expect("Record failed");
        }
    }

    let agg = store
        .get_aggregate_statistics()
        .expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 6);
    assert_eq!(*agg.x_wins(), 3);
    assert_eq!(*agg.o_wins(), 1);
    assert_eq!(*agg.draws(), 2);
    assert!((agg.rate(Outcome::X) - 50.0).abs() < 0.001);
}

#[test]
fn test_move_count_outside_board_rejected() {
    let (_db, store) = setup_test_db();

    for moves in [0, 10] {
        let err = store.record_game(Outcome::Draw, moves).unwrap_err();
        assert_eq!(err.kind, StatsErrorKind::WriteFailed);
    }

    let agg = store.get_aggregate_statistics().expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 0);
}

#[test]
fn test_ensure_schema_keeps_existing_records() {
    let (_db, store) = setup_test_db();
    store.ensure_schema().expect("First init failed");
    store.record_game(Outcome::O, 6).expect("Record failed");

    store.ensure_schema().expect("Second init failed");
    let reopened = StatsStore::new(store.db_path());
    reopened.ensure_schema().expect("Third init failed");

    let agg = reopened
        .get_aggregate_statistics()
        .expect("Aggregation failed");
    assert_eq!(*agg.total_games(), 1);
    assert_eq!(*agg.o_wins(), 1);
}

#[test]
fn test_unreachable_store_is_unavailable() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("stats.db");
    let store = StatsStore::new(path.to_str().expect("Invalid path"));

    let err = store.get_aggregate_statistics().unwrap_err();
    assert_eq!(err.kind, StatsErrorKind::StorageUnavailable);

    let err = store.record_game(Outcome::X, 5).unwrap_err();
    assert_eq!(err.kind, StatsErrorKind::StorageUnavailable);
}

#[test]
fn test_recent_games_most_recent_first() {
    let (_db, store) = setup_test_db();
    let first = store.record_game(Outcome::X, 5).expect("Record failed");
    let second = store.record_game(Outcome::Draw, 9).expect("Record failed");
    let third = store.record_game(Outcome::O, 6).expect("Record failed");

    let games = store.recent_games(2).expect("History failed");
    assert_eq!(games, vec![third, second]);

    let all = store.recent_games(10).expect("History failed");
    assert_eq!(all.len(), 3);
    assert_eq!(all[2], first);
}

#[test]
fn test_finished_game_round_trips_through_store() {
    let (_db, store) = setup_test_db();

    let mut game = GameState::new();
    for pos in [0, 3, 1, 4, 2] {
        game.apply_move(pos).expect("legal move");
    }
    let outcome = game.outcome().expect("game finished");
    store
        .record_game(outcome, game.moves_played())
        .expect("Record failed");

    let history = store.recent_games(1).expect("History failed");
    assert_eq!(*history[0].moves_count(), 5);
    assert_eq!(history[0].parse_outcome().expect("Parse failed"), Outcome::X);
}

#[test]
fn test_outcome_strings_match_schema() {
    assert_eq!(Outcome::X.as_ref(), "X");
    assert_eq!(Outcome::O.as_ref(), "O");
    assert_eq!(Outcome::Draw.as_ref(), "Draw");
    assert!("draw".parse::<Outcome>().is_err());
}
