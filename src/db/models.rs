//! Database models and derived statistics.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::db::{StatsError, schema};
use crate::game::Outcome;

/// One completed game as stored in the `games` table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRecord {
    id: i32,
    winner: String,
    game_date: NaiveDateTime,
    moves_count: i32,
}

impl GameRecord {
    /// Parses the stored winner string into an [`Outcome`].
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the row holds an unknown winner value.
    #[instrument(skip(self), fields(winner = %self.winner))]
    pub fn parse_outcome(&self) -> Result<Outcome, StatsError> {
        self.winner.parse().map_err(|_| {
            StatsError::unavailable(format!(
                "Invalid winner '{}' in game {}",
                self.winner, self.id
            ))
        })
    }
}

/// Insertable row for recording a finished game.
///
/// `game_date` is filled in by the column default.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRecord {
    winner: String,
    moves_count: i32,
}

impl NewGameRecord {
    /// Builds the row for a finished game.
    ///
    /// `moves_played` is at most 9, so the narrowing cast is lossless.
    pub fn from_outcome(outcome: Outcome, moves_played: usize) -> Self {
        Self::new(outcome.as_ref().to_string(), moves_played as i32)
    }
}

/// Win/draw counts over every recorded game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct PlayerAggregate {
    total_games: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl PlayerAggregate {
    /// Creates aggregate statistics from raw counts.
    pub fn new(total_games: u32, x_wins: u32, o_wins: u32, draws: u32) -> Self {
        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
        }
    }

    /// Number of games that ended with the given outcome.
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::X => self.x_wins,
            Outcome::O => self.o_wins,
            Outcome::Draw => self.draws,
        }
    }

    /// Share of games with the given outcome as a percentage (0.0–100.0).
    ///
    /// Returns 0.0 when no games have been played.
    pub fn rate(&self, outcome: Outcome) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            (f64::from(self.count(outcome)) / f64::from(self.total_games)) * 100.0
        }
    }
}
