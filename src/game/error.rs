//! Game error types.

use derive_more::{Display, Error};

/// Error returned when a move is rejected.
///
/// A rejected move never alters the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell at the position is already taken.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The position is not a board index (0-8).
    #[display("Position index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
}

/// Error returned when parsing a [`Board`](super::Board) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text does not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character is not a recognised cell symbol.
    #[display("Invalid cell symbol '{}'", _0)]
    InvalidCell(#[error(not(source))] char),
}
