//! High score persistence.
//!
//! The score is stored as a one-key JSON record, `{"high_score": 1234}`.
//! Loading never fails: a missing or unreadable file counts as a high
//! score of zero.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_2048::Score;
use tracing::{debug, info, instrument, warn};

/// On-disk high score record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: Score,
}

/// File-backed high score store.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store reading and writing `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored high score, falling back to 0 on any failure.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Score {
        if !self.path.exists() {
            info!("No high score file, starting from 0");
            return 0;
        }

        match self.try_load() {
            Ok(score) => {
                debug!(score, "High score loaded");
                score
            }
            Err(e) => {
                warn!(error = %e, "Unreadable high score file, starting from 0");
                0
            }
        }
    }

    /// Loads the stored high score, reporting why it could not be read.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn try_load(&self) -> Result<Score, StoreError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::new(format!("Failed to read high score file: {}", e)))?;
        let record: HighScoreRecord = serde_json::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse high score file: {}", e)))?;
        Ok(record.high_score)
    }

    /// Writes `high_score`, creating parent directories as needed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, high_score: Score) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::new(format!("Failed to create directory: {}", e)))?;
        }

        let json = serde_json::to_string(&HighScoreRecord { high_score })
            .map_err(|e| StoreError::new(format!("Failed to encode high score: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| StoreError::new(format!("Failed to write high score file: {}", e)))?;

        info!(high_score, "High score saved");
        Ok(())
    }
}

/// High score storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("High score error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
