//! Terminal driver: input validation, rendering and the play loop.

mod input;
mod render;
mod session;

pub use input::{InputError, MenuChoice, MoveInput, parse_menu_choice, parse_move};
pub use render::{render_board, render_history, render_result, render_statistics};
pub use session::Session;
