//! Application state and logic.

use tracing::{debug, info};

use super::input::Action;
use crate::session::GameSession;

/// Main application state.
pub struct App {
    session: GameSession,
    status_message: String,
    running: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            status_message: "Use the arrow keys to slide tiles.".to_string(),
            running: true,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// False once the player asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies a player action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Move(direction) => {
                let report = self.session.apply_move(direction);
                let outcome = report.outcome();
                self.status_message = if outcome.game_over() {
                    format!("Game over! Your score: {}", self.session.score())
                } else if *report.new_high_score() {
                    format!("New high score: {}", self.session.high_score())
                } else if outcome.moved() {
                    format!("Moved {}", direction)
                } else if self.session.is_over() {
                    format!("Game over! Your score: {}", self.session.score())
                } else {
                    format!("Can't move {}", direction)
                };
            }
            Action::Undo => {
                self.status_message = if self.session.undo() {
                    "Move undone.".to_string()
                } else {
                    "Nothing to undo.".to_string()
                };
            }
            Action::NewGame => {
                self.session.new_game();
                self.status_message = "New game started.".to_string();
            }
            Action::Quit => {
                info!(score = self.session.score(), "Player quit");
                self.running = false;
            }
        }
    }
}
