//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_2048::DEFAULT_UNDO_LIMIT;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_2048.toml";

/// Configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the high score is stored.
    #[serde(default = "default_high_score_path")]
    high_score_path: PathBuf,

    /// Maximum number of moves that can be undone.
    #[serde(default = "default_undo_limit")]
    undo_limit: usize,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,

    /// Log file (the terminal is taken by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_high_score_path() -> PathBuf {
    PathBuf::from("high_score.json")
}

#[instrument]
fn default_undo_limit() -> usize {
    DEFAULT_UNDO_LIMIT
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_2048.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_score_path: default_high_score_path(),
            undo_limit: default_undo_limit(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(high_score_path = %config.high_score_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the high score location.
    pub fn with_high_score_path(mut self, path: PathBuf) -> Self {
        self.high_score_path = path;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
