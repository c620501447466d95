//! Mutable game state driven by the play loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::MoveError;
use super::rules;
use super::types::{Board, Cell, GameStatus, Outcome, Player};

/// Complete state of one tic-tac-toe game.
///
/// The state is owned by whoever drives the game and only changes through
/// [`GameState::apply_move`] and [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After a winning move this stays the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status as of the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    /// The outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Places the current player's mark at `position` (0-8).
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::CellOccupied`] if the cell is taken, and
    /// [`MoveError::OutOfRange`] if `position` is not a board index. A
    /// rejected move leaves the state unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Rejecting move on finished game");
            return Err(MoveError::GameOver);
        }

        match self.board.get(position) {
            Some(Cell::Occupied(_)) => {
                debug!("Rejecting move on occupied cell");
                return Err(MoveError::CellOccupied(position));
            }
            None => {
                debug!("Rejecting out-of-range move");
                return Err(MoveError::OutOfRange(position));
            }
            Some(Cell::Empty) => {}
        }

        let before = self.board.occupied_count();
        self.board.occupy(position, self.current_player);
        debug_assert_eq!(self.board.occupied_count(), before + 1);

        self.status = self.evaluate_outcome();
        match self.status {
            GameStatus::InProgress => {
                self.current_player = self.current_player.opponent();
                debug!(next = %self.current_player, "Move accepted");
            }
            status => info!(?status, moves = self.moves_played(), "Game finished"),
        }

        Ok(())
    }

    /// Evaluates the outcome of the current board.
    ///
    /// Pure and idempotent: it reads the board and never changes state.
    pub fn evaluate_outcome(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Restores the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.moves_played(), "Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
