//! Strictly 2048 - pure board engine for the 2048 sliding-tile puzzle.
//!
//! The engine owns a 4×4 board, the running score and a bounded undo
//! history. It performs no I/O: rendering, input and high-score storage
//! live in the application crate and call into [`BoardEngine`].
//!
//! # Architecture
//!
//! - **Board**: fixed 4×4 grid of tile values (0 = empty)
//! - **Line merge**: the compress/merge/compress pass applied to each row or column
//! - **Rules**: terminal-state detection
//! - **Tile source**: injected randomness for spawning new tiles
//! - **Engine**: move/undo/new-game lifecycle over a [`GameState`]
//!
//! # Example
//!
//! ```
//! use strictly_2048::{BoardEngine, Direction, RandSource};
//!
//! let mut engine = BoardEngine::new(RandSource::seeded(7));
//! engine.new_game();
//! let outcome = engine.apply_move(Direction::Left);
//! assert!(outcome.score_delta() <= engine.score());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod direction;
mod engine;
mod history;
mod line;
mod rules;
mod source;
mod state;

// Crate-level exports - Board types
pub use board::{Board, SIZE, Tile};

// Crate-level exports - Directions
pub use direction::{Direction, DirectionError};

// Crate-level exports - Engine
pub use engine::{BoardEngine, MoveOutcome, Spawn};

// Crate-level exports - Undo history
pub use history::{DEFAULT_UNDO_LIMIT, UndoHistory};

// Crate-level exports - Line merge algorithm
pub use line::{Line, LineMerge, merge_line};

// Crate-level exports - Rules
pub use rules::is_game_over;

// Crate-level exports - Randomness
pub use source::{FOUR_PROBABILITY, RandSource, TileSource};

// Crate-level exports - Game state
pub use state::{GameState, GameStatus, Score};
