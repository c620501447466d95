//! Tic Tac Toe - terminal game with persisted statistics.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_stats::{
    AppConfig, DB_PATH_ENV, Session, StatsStore, render_history, render_statistics,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    let env_db_path = std::env::var(DB_PATH_ENV).ok();
    let db_path = |flag: Option<String>| {
        config.resolve_db_path(flag.as_deref(), env_db_path.as_deref())
    };

    match cli.command.unwrap_or(Command::Play { db_path: None }) {
        Command::Play { db_path: flag } => run_play(db_path(flag)),
        Command::Stats { db_path: flag } => run_stats(db_path(flag)),
        Command::History {
            db_path: flag,
            limit,
        } => run_history(db_path(flag), limit),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game loop
#[instrument]
fn run_play(db_path: String) -> Result<()> {
    info!("Starting game");
    let store = StatsStore::new(db_path);
    if let Err(e) = store.ensure_schema() {
        warn!(error = %e, "Statistics store unavailable, playing without it");
        eprintln!("Warning: game statistics will not be saved ({})", e.kind);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), store);
    session.run()
}

/// Print aggregate statistics
#[instrument]
fn run_stats(db_path: String) -> Result<()> {
    let store = StatsStore::new(db_path);
    match store.get_aggregate_statistics() {
        Ok(stats) => print!("{}", render_statistics(&stats)),
        Err(e) => {
            warn!(error = %e, "Failed to load statistics");
            println!("Statistics unavailable.");
        }
    }
    Ok(())
}

/// Print the most recent games
#[instrument]
fn run_history(db_path: String, limit: i64) -> Result<()> {
    let store = StatsStore::new(db_path);
    match store.recent_games(limit) {
        Ok(games) => print!("{}", render_history(&games)),
        Err(e) => {
            warn!(error = %e, "Failed to load game history");
            println!("Game history unavailable.");
        }
    }
    Ok(())
}
