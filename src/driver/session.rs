//! Interactive play loop over line-based input and output.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::db::StatsStore;
use crate::driver::input::{MenuChoice, MoveInput, parse_menu_choice, parse_move};
use crate::driver::render::{render_board, render_result, render_statistics};
use crate::game::{GameState, MoveError};

const MENU_PROMPT: &str = "\nWhat would you like to do?\n1. Play again\n2. View statistics\n3. Quit\nEnter choice (1-3): ";
const GOODBYE: &str = "Thanks for playing! Goodbye!";

/// How a pass through the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One player's terminal session: the active game plus its I/O.
///
/// The session owns the single [`GameState`]; finished games are handed
/// to the [`StatsStore`] and the state is reset for the next game.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    store: StatsStore,
    game: GameState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh game.
    #[instrument(skip(input, output, store), fields(db_path = %store.db_path()))]
    pub fn new(input: R, output: W, store: StatsStore) -> Self {
        info!("Creating play session");
        Self {
            input,
            output,
            store,
            game: GameState::new(),
        }
    }

    /// Returns the active game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the terminal are returned; rejected moves and
    /// statistics failures are reported to the player and play goes on.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;

        loop {
            write!(self.output, "{}", render_board(&self.game))?;

            let flow = if self.game.status().is_terminal() {
                self.finish_game()?
            } else {
                self.take_turn()?
            };

            if flow == Flow::Quit {
                writeln!(self.output, "{GOODBYE}")?;
                info!("Session ended");
                return Ok(());
            }
        }
    }

    /// Prompts for and applies one move.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    fn take_turn(&mut self) -> anyhow::Result<Flow> {
        let prompt = format!(
            "Player {}, enter position (1-9) or 'q' to quit: ",
            self.game.current_player()
        );
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Flow::Quit);
        };

        match parse_move(&line) {
            Ok(MoveInput::Quit) => Ok(Flow::Quit),
            Ok(MoveInput::Cell(pos)) => {
                if let Err(e) = self.game.apply_move(pos) {
                    debug!(error = %e, "Move rejected");
                    writeln!(self.output, "{}", move_error_message(e))?;
                }
                Ok(Flow::Continue)
            }
            Err(e) => {
                debug!(error = %e, "Input rejected");
                writeln!(self.output, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Announces and records a finished game, then runs the menu.
    #[instrument(skip(self))]
    fn finish_game(&mut self) -> anyhow::Result<Flow> {
        if let Some(message) = render_result(self.game.status()) {
            writeln!(self.output, "{message}")?;
        }
        self.record_result()?;

        loop {
            let Some(line) = self.prompt(MENU_PROMPT)? else {
                return Ok(Flow::Quit);
            };

            match parse_menu_choice(&line) {
                Ok(MenuChoice::PlayAgain) => {
                    self.game.reset();
                    return Ok(Flow::Continue);
                }
                Ok(MenuChoice::ViewStatistics) => {
                    self.show_statistics()?;
                    if self.prompt("\nPress Enter to continue...")?.is_none() {
                        return Ok(Flow::Quit);
                    }
                }
                Ok(MenuChoice::Quit) => return Ok(Flow::Quit),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Stores the outcome; a failed write is reported, never fatal.
    fn record_result(&mut self) -> anyhow::Result<()> {
        let Some(outcome) = self.game.outcome() else {
            return Ok(());
        };

        match self.store.record_game(outcome, self.game.moves_played()) {
            Ok(record) => debug!(game_id = record.id(), "Result saved"),
            Err(e) => {
                warn!(error = %e, "Failed to save game result");
                writeln!(self.output, "Could not save game result: {}", e.kind)?;
            }
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> anyhow::Result<()> {
        match self.store.get_aggregate_statistics() {
            Ok(stats) => write!(self.output, "{}", render_statistics(&stats))?,
            Err(e) => {
                warn!(error = %e, "Failed to load statistics");
                writeln!(self.output, "Statistics unavailable.")?;
            }
        }
        Ok(())
    }

    /// Writes a prompt and reads a line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Player-facing wording for a rejected move.
fn move_error_message(err: MoveError) -> &'static str {
    match err {
        MoveError::CellOccupied(_) => "That position is already taken! Choose another position.",
        MoveError::GameOver => "The game is already over.",
        MoveError::OutOfRange(_) => "Invalid position! Please enter a number between 1 and 9.",
    }
}
