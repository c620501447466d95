//! Command-line interface for tictactoe_stats.

use clap::{Parser, Subcommand};

/// Two-player terminal tic-tac-toe with persisted statistics
#[derive(Parser, Debug)]
#[command(name = "tictactoe_stats")]
#[command(about = "Two-player tic-tac-toe with game statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games at the terminal
    Play {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,
    },

    /// Print aggregate statistics
    Stats {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,
    },

    /// Print the most recent games
    History {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,

        /// Number of games to show
        #[arg(short, long, default_value = "10")]
        limit: i64,
    },
}
