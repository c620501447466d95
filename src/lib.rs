//! Two-player tic-tac-toe with persisted game statistics.
//!
//! # Architecture
//!
//! - **Game**: [`GameState`] owns the board, turn order and status;
//!   [`rules`] holds the pure win/draw evaluation.
//! - **Statistics**: [`StatsStore`] appends one [`GameRecord`] per
//!   finished game to SQLite and aggregates them into a
//!   [`PlayerAggregate`].
//! - **Driver**: [`Session`] runs the line-based play loop, validating raw
//!   input into typed commands before touching the game.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_stats::{GameState, StatsStore};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut game = GameState::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     game.apply_move(pos)?;
//! }
//!
//! let store = StatsStore::new("tictactoe_stats.db");
//! if let Some(outcome) = game.outcome() {
//!     store.record_game(outcome, game.moves_played())?;
//! }
//! println!("{} games so far", store.get_aggregate_statistics()?.total_games());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod driver;
mod game;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DB_PATH_ENV};

// Crate-level exports - Statistics persistence
pub use db::{GameRecord, NewGameRecord, PlayerAggregate, StatsError, StatsErrorKind, StatsStore};

// Crate-level exports - Terminal driver
pub use driver::{
    InputError, MenuChoice, MoveInput, Session, parse_menu_choice, parse_move, render_board,
    render_history, render_result, render_statistics,
};

// Crate-level exports - Game types
pub use game::{
    BOARD_CELLS, Board, BoardParseError, Cell, GameState, GameStatus, MoveError, Outcome, Player,
    rules,
};
