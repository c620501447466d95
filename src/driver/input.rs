//! Validation of raw player input into typed commands.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::game::BOARD_CELLS;

/// A validated line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Leave the game.
    Quit,
    /// Play the cell at this 0-based board index.
    Cell(usize),
}

/// A validated choice from the post-game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a new game.
    PlayAgain,
    /// Show aggregate statistics.
    ViewStatistics,
    /// Leave the program.
    Quit,
}

/// Input that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Invalid input! Please enter a number between 1 and 9.")]
    Empty,

    /// The text is not a number.
    #[display("Invalid input! Please enter a number between 1 and 9.")]
    NotANumber(#[error(not(source))] String),

    /// The number is not a position on the board.
    #[display("Invalid position! Please enter a number between 1 and 9.")]
    OutOfRange(#[error(not(source))] i64),

    /// The menu choice is not one of the offered options.
    #[display("Invalid choice. Please enter 1, 2, or 3.")]
    InvalidChoice(#[error(not(source))] String),
}

/// Parses a move prompt line: `q` to quit or a 1-based position 1-9.
///
/// # Errors
///
/// Returns [`InputError`] for blank, non-numeric or out-of-range input.
#[instrument]
pub fn parse_move(line: &str) -> Result<MoveInput, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(MoveInput::Quit);
    }

    let number: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    match usize::try_from(number) {
        Ok(n) if (1..=BOARD_CELLS).contains(&n) => Ok(MoveInput::Cell(n - 1)),
        _ => Err(InputError::OutOfRange(number)),
    }
}

/// Parses a post-game menu line (`1`, `2` or `3`).
///
/// # Errors
///
/// Returns [`InputError::InvalidChoice`] for anything else.
#[instrument]
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    match line.trim() {
        "1" => Ok(MenuChoice::PlayAgain),
        "2" => Ok(MenuChoice::ViewStatistics),
        "3" => Ok(MenuChoice::Quit),
        other => Err(InputError::InvalidChoice(other.to_string())),
    }
}
