//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They hold no state, so they can be
//! called any number of times on the same board with the same result.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the status a board represents.
///
/// A winning line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
