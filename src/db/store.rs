//! SQLite-backed store for completed game records.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{GameRecord, NewGameRecord, PlayerAggregate, StatsError, schema};
use crate::game::{BOARD_CELLS, Outcome};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Append-only store of finished games.
///
/// Only the database path is held; every operation opens its own
/// connection and drops it when done.
#[derive(Debug, Clone)]
pub struct StatsStore {
    db_path: String,
}

impl StatsStore {
    /// Creates a store for the database at the given path.
    ///
    /// Use `":memory:"` for a throwaway database; note that each operation
    /// then sees a fresh, empty database.
    #[instrument(skip(db_path))]
    pub fn new(db_path: impl Into<String>) -> Self {
        let db_path = db_path.into();
        info!(path = %db_path, "Creating StatsStore");
        Self { db_path }
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a connection with the schema in place.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StatsError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path).map_err(|e| {
            StatsError::unavailable(format!("Failed to connect to '{}': {}", self.db_path, e))
        })?;

        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            StatsError::unavailable(format!("Failed to prepare schema: {}", e))
        })?;
        if !applied.is_empty() {
            info!(count = applied.len(), "Schema migrations applied");
        }

        Ok(conn)
    }

    /// Creates the `games` and `players` tables if they are missing.
    ///
    /// Safe to call on every startup; existing records are kept.
    ///
    /// # Errors
    ///
    /// Returns a storage-unavailable [`StatsError`] if the database cannot
    /// be opened or migrated.
    #[instrument(skip(self))]
    pub fn ensure_schema(&self) -> Result<(), StatsError> {
        self.connection().map(|_| ())
    }

    /// Records a completed game.
    ///
    /// The timestamp is assigned by the database at write time.
    ///
    /// # Errors
    ///
    /// Returns a storage-unavailable [`StatsError`] if the database cannot
    /// be opened, or a write-failed one if `moves_played` is not 1-9 or
    /// the insert fails.
    #[instrument(skip(self))]
    pub fn record_game(
        &self,
        outcome: Outcome,
        moves_played: usize,
    ) -> Result<GameRecord, StatsError> {
        if moves_played == 0 || moves_played > BOARD_CELLS {
            return Err(StatsError::write_failed(format!(
                "Move count {} is outside 1-{}",
                moves_played, BOARD_CELLS
            )));
        }

        debug!("Recording game result");
        let mut conn = self.connection()?;

        let record = diesel::insert_into(schema::games::table)
            .values(&NewGameRecord::from_outcome(outcome, moves_played))
            .returning(GameRecord::as_returning())
            .get_result(&mut conn)
            .map_err(|e| StatsError::write_failed(format!("Failed to insert game: {}", e)))?;

        info!(
            game_id = record.id(),
            winner = %record.winner(),
            moves = record.moves_count(),
            "Game result recorded"
        );
        Ok(record)
    }

    /// Counts every recorded game by outcome.
    ///
    /// An empty store yields all zeros.
    ///
    /// # Errors
    ///
    /// Returns a storage-unavailable [`StatsError`] if the database cannot
    /// be read.
    #[instrument(skip(self))]
    pub fn get_aggregate_statistics(&self) -> Result<PlayerAggregate, StatsError> {
        debug!("Computing aggregate statistics");
        let mut conn = self.connection()?;

        let winners = schema::games::table
            .select(schema::games::winner)
            .load::<String>(&mut conn)
            .map_err(|e| StatsError::unavailable(format!("Failed to read games: {}", e)))?;

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;

        for winner in &winners {
            match winner.parse::<Outcome>() {
                Ok(Outcome::X) => x_wins += 1,
                Ok(Outcome::O) => o_wins += 1,
                Ok(Outcome::Draw) => draws += 1,
                Err(_) => warn!(winner = %winner, "Unknown winner value"),
            }
        }

        let total = u32::try_from(winners.len()).unwrap_or(u32::MAX);
        let aggregate = PlayerAggregate::new(total, x_wins, o_wins, draws);

        info!(
            total = %total,
            x_wins = %x_wins,
            o_wins = %o_wins,
            draws = %draws,
            "Aggregate statistics computed"
        );
        Ok(aggregate)
    }

    /// Loads up to `limit` games, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a storage-unavailable [`StatsError`] if the database cannot
    /// be read.
    #[instrument(skip(self))]
    pub fn recent_games(&self, limit: i64) -> Result<Vec<GameRecord>, StatsError> {
        debug!("Loading recent games");
        let mut conn = self.connection()?;

        let games = schema::games::table
            .order((schema::games::game_date.desc(), schema::games::id.desc()))
            .limit(limit)
            .select(GameRecord::as_select())
            .load::<GameRecord>(&mut conn)
            .map_err(|e| StatsError::unavailable(format!("Failed to read games: {}", e)))?;

        info!(count = games.len(), "Recent games loaded");
        Ok(games)
    }
}
