//! Command-line interface for strictly_2048.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_2048_tui::DEFAULT_CONFIG_PATH;

/// Strictly 2048 - sliding-tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Fixed RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// High score file (overrides the config file)
        #[arg(long)]
        high_score_file: Option<PathBuf>,
    },

    /// Print the stored high score
    HighScore {
        /// High score file (overrides the config file)
        #[arg(long)]
        high_score_file: Option<PathBuf>,
    },
}
