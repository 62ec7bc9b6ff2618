//! Complete game state for 2048.

use super::board::Board;
use super::history::UndoHistory;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Running score of a game.
pub type Score = u64;

/// Coarse phase of the game.
///
/// Observational only: the engine keeps accepting moves in either phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Moves are still possible.
    #[default]
    Playing,
    /// The board is full with no adjacent equal tiles.
    GameOver,
}

/// Board, score and undo history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Points accumulated from merges.
    score: Score,
    /// Snapshots for undo.
    history: UndoHistory,
    /// Game phase.
    status: GameStatus,
}

impl GameState {
    /// Creates an empty game with the given undo capacity.
    pub fn new(undo_limit: usize) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            history: UndoHistory::with_limit(undo_limit),
            status: GameStatus::Playing,
        }
    }

    /// Empties the board, score and history, keeping the undo capacity.
    pub(crate) fn reset(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.history.clear();
        self.status = GameStatus::Playing;
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn history_mut(&mut self) -> &mut UndoHistory {
        &mut self.history
    }

    pub(crate) fn add_score(&mut self, points: Score) {
        self.score += points;
    }

    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            score: 0,
            history: UndoHistory::default(),
            status: GameStatus::Playing,
        }
    }
}
