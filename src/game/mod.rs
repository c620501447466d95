//! Tic-tac-toe game state machine.
//!
//! [`GameState`] owns the board and turn order; [`rules`] holds the pure
//! win/draw evaluation it relies on.

mod error;
pub mod rules;
mod state;
mod types;

pub use error::{BoardParseError, MoveError};
pub use state::GameState;
pub use types::{BOARD_CELLS, Board, Cell, GameStatus, Outcome, Player};
