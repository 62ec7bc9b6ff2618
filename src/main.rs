//! Strictly 2048 - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_2048_tui::{AppConfig, GameSession, HighScoreStore, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            seed,
            high_score_file,
        } => {
            let mut config = config;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(path) = high_score_file {
                config = config.with_high_score_path(path);
            }
            run_play(config)
        }
        Command::HighScore { high_score_file } => {
            let path = high_score_file.unwrap_or_else(|| config.high_score_path().clone());
            print_high_score(&path);
            Ok(())
        }
    }
}

/// Run the terminal game
fn run_play(config: AppConfig) -> Result<()> {
    initialize_file_tracing(config.log_file())?;
    info!(?config, "Starting Strictly 2048");

    let session = GameSession::from_config(&config);
    let previous_best = session.high_score();
    run_tui(session)?;

    let high_score = HighScoreStore::new(config.high_score_path()).load();
    if high_score > previous_best {
        println!("New high score: {}", high_score);
    } else {
        println!("High score: {}", high_score);
    }
    Ok(())
}

/// Print the stored high score
fn print_high_score(path: &Path) {
    let store = HighScoreStore::new(path);
    println!("{}", store.load());
}

/// Logs go to a file so they do not draw over the board.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_2048=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
