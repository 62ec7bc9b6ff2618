//! Board engine: the move, spawn, undo and new-game lifecycle.

use super::board::{Board, SIZE, Tile};
use super::direction::Direction;
use super::line::merge_line;
use super::rules;
use super::source::TileSource;
use super::state::{GameState, GameStatus, Score};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A tile placed by [`BoardEngine::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Spawn {
    /// Row of the new tile.
    row: usize,
    /// Column of the new tile.
    col: usize,
    /// Value placed (2 or 4).
    value: Tile,
}

/// What a call to [`BoardEngine::apply_move`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    direction: Direction,
    moved: bool,
    score_delta: Score,
    spawned: Option<Spawn>,
    game_over: bool,
}

impl MoveOutcome {
    /// The direction that was attempted.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether any tile slid or merged.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Points earned by this move.
    pub fn score_delta(&self) -> Score {
        self.score_delta
    }

    /// Tile spawned after the move, if it moved and a cell was free.
    pub fn spawned(&self) -> Option<Spawn> {
        self.spawned
    }

    /// Whether this move ended the game.
    ///
    /// Always false for a move that did not change the board; check
    /// [`BoardEngine::status`] for the current phase.
    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

/// 2048 game engine.
///
/// Owns the [`GameState`] and the [`TileSource`] used for spawning. Every
/// public operation runs to completion before returning, so callers never
/// observe a half-applied move.
#[derive(Debug, Clone)]
pub struct BoardEngine<S> {
    state: GameState,
    source: S,
}

impl<S: TileSource> BoardEngine<S> {
    /// Creates an engine with an empty board and the default undo capacity.
    ///
    /// Call [`new_game`](Self::new_game) to place the starting tiles.
    #[instrument(skip(source))]
    pub fn new(source: S) -> Self {
        Self {
            state: GameState::default(),
            source,
        }
    }

    /// Creates an engine keeping at most `undo_limit` undo snapshots.
    #[instrument(skip(source))]
    pub fn with_undo_limit(source: S, undo_limit: usize) -> Self {
        Self {
            state: GameState::new(undo_limit),
            source,
        }
    }

    /// Replaces the board wholesale, clearing score and history.
    ///
    /// Useful for resuming a position or setting up a test.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn load_board(&mut self, board: Board) {
        self.state.reset();
        *self.state.board_mut() = board;
        self.refresh_status();
    }

    /// Starts a new game: empty board, zero score, no history, two tiles.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.state.reset();
        self.spawn_tile();
        self.spawn_tile();
        info!(board = %self.state.board(), "New game started");
    }

    /// Places a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board when no cell is empty.
    #[instrument(skip(self))]
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.state.board().empty_cells();
        if empty.is_empty() {
            debug!("No empty cell, skipping spawn");
            return None;
        }

        let (row, col) = empty[self.source.choose(empty.len())];
        let value = if self.source.spawn_four() { 4 } else { 2 };
        self.state.board_mut().set(row, col, value);

        debug!(row, col, value, "Spawned tile");
        Some(Spawn::new(row, col, value))
    }

    /// Shifts the board in `direction`.
    ///
    /// A snapshot is pushed onto the undo history first and rolled back if
    /// nothing moved, so a no-op move leaves the history untouched. When
    /// the board changed, the score grows by the merged tile values, a new
    /// tile is spawned and the game-over check runs.
    #[instrument(skip(self), fields(score = self.state.score()))]
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let snapshot = *self.state.board();
        let pushed = self.state.history_mut().push(snapshot);

        let mut moved = false;
        let mut score_delta = 0;
        let board = self.state.board_mut();
        for index in 0..SIZE {
            let mut line = if direction.is_horizontal() {
                board.row(index)
            } else {
                board.column(index)
            };
            if direction.is_reversed() {
                line.reverse();
            }

            let merged = merge_line(line);
            let mut result = merged.line();
            if direction.is_reversed() {
                result.reverse();
            }

            if direction.is_horizontal() {
                board.set_row(index, result);
            } else {
                board.set_column(index, result);
            }
            moved |= merged.moved();
            score_delta += merged.score();
        }

        if !moved {
            self.state.history_mut().rollback(pushed);
            debug!(%direction, "Move changed nothing");
            return MoveOutcome {
                direction,
                moved: false,
                score_delta: 0,
                spawned: None,
                game_over: false,
            };
        }

        self.state.add_score(score_delta);
        let spawned = self.spawn_tile();
        let game_over = rules::is_game_over(self.state.board());
        if game_over {
            self.state.set_status(GameStatus::GameOver);
            info!(score = self.state.score(), "Game over");
        }

        debug!(%direction, score_delta, score = self.state.score(), "Move applied");
        MoveOutcome {
            direction,
            moved: true,
            score_delta,
            spawned,
            game_over,
        }
    }

    /// Restores the board from before the last move.
    ///
    /// Returns false and does nothing when there is no history. The score
    /// is recomputed as the sum of the restored board's tiles rather than
    /// restored from the past, so it can differ from the score the game
    /// had at that point.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.state.history_mut().pop() else {
            debug!("Nothing to undo");
            return false;
        };

        *self.state.board_mut() = previous;
        self.state.set_score(previous.sum());
        self.refresh_status();
        debug!(score = self.state.score(), depth = self.undo_depth(), "Undo applied");
        true
    }
}

impl<S> BoardEngine<S> {
    /// Checks whether no move can change the current board.
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(self.state.board())
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the current score.
    pub fn score(&self) -> Score {
        *self.state.score()
    }

    /// Returns the game phase.
    pub fn status(&self) -> GameStatus {
        *self.state.status()
    }

    /// Number of moves that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.state.history().len()
    }

    /// Highest tile on the board.
    pub fn max_tile(&self) -> Tile {
        self.state.board().max_tile()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn refresh_status(&mut self) {
        let status = if rules::is_game_over(self.state.board()) {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        self.state.set_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandSource;

    /// Always picks the first empty cell and always spawns a 2.
    struct FirstCell;

    impl TileSource for FirstCell {
        fn choose(&mut self, _len: usize) -> usize {
            0
        }

        fn spawn_four(&mut self) -> bool {
            false
        }
    }

    fn engine_with(rows: [[Tile; SIZE]; SIZE]) -> BoardEngine<FirstCell> {
        let mut engine = BoardEngine::new(FirstCell);
        engine.load_board(Board::from_rows(rows));
        engine
    }

    #[test]
    fn test_new_game_places_two_tiles() {
        let mut engine = BoardEngine::new(RandSource::seeded(1));
        engine.new_game();
        assert_eq!(engine.board().tile_count(), 2);
        assert!(
            engine
                .board()
                .rows()
                .iter()
                .flatten()
                .all(|&v| v == 0 || v == 2 || v == 4)
        );
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.undo_depth(), 0);
    }

    #[test]
    fn test_move_left_merges_and_spawns() {
        let mut engine = engine_with([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = engine.apply_move(Direction::Left);

        assert!(outcome.moved());
        assert_eq!(outcome.score_delta(), 4);
        assert_eq!(engine.score(), 4);
        // FirstCell fills (0, 1), the first empty cell after the merge.
        assert_eq!(outcome.spawned(), Some(Spawn::new(0, 1, 2)));
        assert_eq!(engine.board().row(0), [4, 2, 0, 0]);
        assert_eq!(engine.undo_depth(), 1);
    }

    #[test]
    fn test_move_right_mirrors() {
        let mut engine = engine_with([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
        engine.apply_move(Direction::Right);
        assert_eq!(engine.board().row(0), [2, 0, 4, 4]);
    }

    #[test]
    fn test_move_down_uses_columns() {
        let mut engine = engine_with([[2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0]]);
        engine.apply_move(Direction::Down);
        assert_eq!(engine.board().column(0), [2, 0, 4, 4]);
        // Spawn went to (0, 0).
        assert_eq!(engine.board().get(0, 0), Some(2));
    }

    #[test]
    fn test_move_up_uses_columns() {
        let mut engine = engine_with([[0, 0, 0, 8], [0, 0, 0, 0], [0, 0, 0, 8], [0, 0, 0, 2]]);
        let outcome = engine.apply_move(Direction::Up);
        assert_eq!(outcome.score_delta(), 16);
        assert_eq!(engine.board().column(3), [16, 2, 0, 0]);
    }

    #[test]
    fn test_noop_move_leaves_history() {
        let mut engine = engine_with([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
        let outcome = engine.apply_move(Direction::Up);
        assert!(!outcome.moved());
        assert_eq!(outcome.spawned(), None);
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(engine.board().row(0), [2, 4, 8, 16]);
    }

    #[test]
    fn test_undo_restores_board_and_sums_score() {
        let mut engine = engine_with([[2, 2, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]);
        let before = *engine.board();
        engine.apply_move(Direction::Left);
        assert!(engine.undo());
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.score(), 8);
        assert!(!engine.undo());
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let mut engine = engine_with(rows);
        assert_eq!(engine.spawn_tile(), None);
        assert_eq!(engine.board(), &Board::from_rows(rows));
    }

    #[test]
    fn test_load_board_derives_status() {
        let engine = engine_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert!(engine.is_game_over());
    }
}
