//! Strictly 2048 - terminal front end for the 2048 board engine.
//!
//! The game rules live in the `strictly_2048` crate. This crate supplies
//! everything around them:
//!
//! # Architecture
//!
//! - **Config**: TOML settings for storage, undo depth and seeding
//! - **High score**: JSON file store that tolerates missing or corrupt data
//! - **Session**: one engine wired to the high score store
//! - **TUI**: ratatui rendering and key bindings
//!
//! # Example
//!
//! ```no_run
//! use strictly_2048_tui::{AppConfig, GameSession};
//! use strictly_2048::Direction;
//!
//! let config = AppConfig::default().with_seed(42);
//! let mut session = GameSession::from_config(&config);
//! let report = session.apply_move(Direction::Left);
//! println!("moved: {}, high score: {}", report.outcome().moved(), session.high_score());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod high_score;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - High score storage
pub use high_score::{HighScoreStore, StoreError};

// Crate-level exports - Session management
pub use session::{GameSession, TurnReport};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, map_key, run_tui};
