//! Move directions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Direction to shift the board.
///
/// A closed set: every caller-facing input (keys, text) must be mapped onto
/// one of these four before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Shift tiles toward row 0.
    Up,
    /// Shift tiles toward the last row.
    Down,
    /// Shift tiles toward column 0.
    Left,
    /// Shift tiles toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True when lines are rows (Left/Right), false for columns.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when each line must be mirrored so the merge runs toward index 0.
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(DirectionError::new(s)),
        }
    }
}

/// Unrecognized direction input.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid direction {:?} at {}:{}", input, file, line)]
pub struct DirectionError {
    /// The rejected input.
    pub input: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DirectionError {
    /// Creates a new direction error with caller location tracking.
    #[track_caller]
    #[instrument(skip(input))]
    pub fn new(input: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" up ".parse::<Direction>().unwrap(), Direction::Up);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "diagonal");
        assert!(err.to_string().contains("Invalid direction"));
    }

    #[test]
    fn test_orientation() {
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Down.is_reversed());
        assert!(!Direction::Left.is_reversed());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }
}
