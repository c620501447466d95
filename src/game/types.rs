//! Core domain types for tic-tac-toe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardParseError;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position, `None` when out of range.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Places a player's mark. Callers have already checked the position.
    pub(crate) fn occupy(&mut self, pos: usize, player: Player) {
        self.cells[pos] = Cell::Occupied(player);
    }

    /// Checks if a cell is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..BOARD_CELLS).filter(|&pos| self.is_empty(pos)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses nine characters in row-major order: `X`, `O`, and `.`, `_` or a
/// space for empty cells. Characters are case-insensitive.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch.to_ascii_uppercase() {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '.' | '_' | ' ' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self { cells })
    }
}

/// Renders the three rows with blank empty cells, e.g. ` X | O |   `.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(p) => p.to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {} ", symbols[0], symbols[1], symbols[2])?;
            if row < 2 {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The outcome of a finished game, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(Player::X) => Some(Outcome::X),
            GameStatus::Won(Player::O) => Some(Outcome::O),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Terminal result of a finished game.
///
/// The string forms (`"X"`, `"O"`, `"Draw"`) are the values persisted in
/// the `games.winner` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Outcome {
    /// Player X won.
    X,
    /// Player O won.
    O,
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::X => Some(Player::X),
            Outcome::O => Some(Player::O),
            Outcome::Draw => None,
        }
    }
}
