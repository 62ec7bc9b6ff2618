//! Game session: one engine plus the high score it competes against.

use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use strictly_2048::{BoardEngine, Direction, GameStatus, MoveOutcome, RandSource, Score};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::high_score::HighScoreStore;

/// Result of one move within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct TurnReport {
    /// What the engine did.
    outcome: MoveOutcome,
    /// Whether this move set a new high score.
    new_high_score: bool,
}

/// A running game wired to high score storage.
///
/// After every score change the session compares the score against the
/// best known one and persists it when beaten. Storage failures are logged
/// and never interrupt play.
#[derive(Debug)]
pub struct GameSession {
    engine: BoardEngine<RandSource<StdRng>>,
    store: HighScoreStore,
    high_score: Score,
}

impl GameSession {
    /// Creates a session and starts the first game.
    #[instrument(skip(engine, store))]
    pub fn new(engine: BoardEngine<RandSource<StdRng>>, store: HighScoreStore) -> Self {
        let high_score = store.load();
        info!(high_score, "Session created");
        let mut session = Self {
            engine,
            store,
            high_score,
        };
        session.engine.new_game();
        session
    }

    /// Builds the engine and store described by `config`.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        let source = match config.seed() {
            Some(seed) => {
                info!(seed, "Using fixed seed");
                RandSource::seeded(*seed)
            }
            None => RandSource::from_entropy(),
        };
        let engine = BoardEngine::with_undo_limit(source, *config.undo_limit());
        Self::new(engine, HighScoreStore::new(config.high_score_path()))
    }

    /// Shifts the board and records a new high score if one was set.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, direction: Direction) -> TurnReport {
        let outcome = self.engine.apply_move(direction);
        let new_high_score = outcome.moved() && self.record_high_score();
        TurnReport::new(outcome, new_high_score)
    }

    /// Undoes the last move. Returns false when there was nothing to undo.
    ///
    /// The recomputed score goes through the same high score check as a move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let undone = self.engine.undo();
        if undone {
            self.record_high_score();
        }
        undone
    }

    /// Abandons the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Returns the engine for rendering.
    pub fn engine(&self) -> &BoardEngine<RandSource<StdRng>> {
        &self.engine
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.engine.score()
    }

    /// Best score seen so far, including the current game.
    pub fn high_score(&self) -> Score {
        self.high_score
    }

    /// Whether the current game has ended.
    pub fn is_over(&self) -> bool {
        self.engine.status() == GameStatus::GameOver
    }

    fn record_high_score(&mut self) -> bool {
        let score = self.engine.score();
        if score <= self.high_score {
            return false;
        }

        debug!(score, previous = self.high_score, "New high score");
        self.high_score = score;
        if let Err(e) = self.store.save(score) {
            warn!(error = %e, "Failed to persist high score");
        }
        true
    }
}
