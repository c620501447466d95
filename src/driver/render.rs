//! Plain-text rendering of the board and statistics.

use crate::db::{GameRecord, PlayerAggregate};
use crate::game::{GameState, GameStatus, Outcome};

const RULE: &str = "==============================";

/// Title, current player, the 1-9 position guide and the board.
pub fn render_board(state: &GameState) -> String {
    format!(
        "\n{RULE}\n    TIC TAC TOE GAME\n{RULE}\n\n\
         Current Player: {player}\n\n\
         Board positions (1-9):\n \
         1 | 2 | 3 \n---|---|---\n \
         4 | 5 | 6 \n---|---|---\n \
         7 | 8 | 9 \n\n\
         Current board:\n{board}\n",
        player = state.current_player(),
        board = state.board(),
    )
}

/// Announcement for a finished game, `None` while it is still running.
pub fn render_result(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("Player {player} wins!")),
        GameStatus::Draw => Some("It's a draw!".to_string()),
    }
}

/// Totals, then win rates when at least one game exists.
pub fn render_statistics(stats: &PlayerAggregate) -> String {
    let mut out = format!(
        "\n{RULE}\n    GAME STATISTICS\n{RULE}\n\
         Total Games Played: {}\n\
         Player X Wins: {}\n\
         Player O Wins: {}\n\
         Draws: {}\n",
        stats.total_games(),
        stats.x_wins(),
        stats.o_wins(),
        stats.draws(),
    );

    if *stats.total_games() > 0 {
        out.push_str(&format!(
            "\nWin Rates:\n\
             Player X: {:.1}%\n\
             Player O: {:.1}%\n\
             Draws: {:.1}%\n",
            stats.rate(Outcome::X),
            stats.rate(Outcome::O),
            stats.rate(Outcome::Draw),
        ));
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

/// One line per game: date, result and move count.
pub fn render_history(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return "No games recorded yet.\n".to_string();
    }

    games
        .iter()
        .map(|game| {
            let result = match game.parse_outcome() {
                Ok(Outcome::Draw) => "Draw".to_string(),
                Ok(outcome) => format!("{outcome} won"),
                Err(_) => format!("unknown ({})", game.winner()),
            };
            format!(
                "#{:<4} {}  {:<8} {} moves\n",
                game.id(),
                game.game_date().format("%Y-%m-%d %H:%M:%S"),
                result,
                game.moves_count()
            )
        })
        .collect()
}
