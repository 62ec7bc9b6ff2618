//! Tests for the TUI application state.

use tempfile::TempDir;

use strictly_2048::{BoardEngine, Direction, RandSource};
use strictly_2048_tui::{Action, App, GameSession, HighScoreStore};

fn setup_app() -> (TempDir, App) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = HighScoreStore::new(dir.path().join("high_score.json"));
    let session = GameSession::new(BoardEngine::new(RandSource::seeded(3)), store);
    (dir, App::new(session))
}

#[test]
fn test_quit_stops_app() {
    let (_dir, mut app) = setup_app();
    assert!(app.is_running());
    app.handle_action(Action::Quit);
    assert!(!app.is_running());
}

#[test]
fn test_undo_with_no_history_reports_it() {
    let (_dir, mut app) = setup_app();
    app.handle_action(Action::Undo);
    assert_eq!(app.status_message(), "Nothing to undo.");
}

#[test]
fn test_move_then_undo_restores_board() {
    let (_dir, mut app) = setup_app();
    let start = *app.session().engine().board();

    let moved = Direction::ALL.into_iter().any(|dir| {
        app.handle_action(Action::Move(dir));
        app.session().engine().undo_depth() == 1
    });
    assert!(moved);

    app.handle_action(Action::Undo);
    assert_eq!(app.status_message(), "Move undone.");
    assert_eq!(app.session().engine().board(), &start);
}

#[test]
fn test_new_game_resets_board() {
    let (_dir, mut app) = setup_app();
    for dir in Direction::ALL {
        app.handle_action(Action::Move(dir));
    }
    app.handle_action(Action::NewGame);
    assert_eq!(app.session().score(), 0);
    assert_eq!(app.session().engine().board().tile_count(), 2);
    assert_eq!(app.session().engine().undo_depth(), 0);
}
