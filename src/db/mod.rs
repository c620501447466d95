//! Persistence layer for completed games and aggregate statistics.

mod error;
mod models;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::{StatsError, StatsErrorKind};
pub use models::{GameRecord, NewGameRecord, PlayerAggregate};
pub use store::StatsStore;
