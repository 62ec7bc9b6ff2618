//! Terminal UI for Strictly 2048.

mod app;
mod guard;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, map_key};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::session::GameSession;
use guard::TerminalGuard;

/// Runs the game in the terminal until the player quits.
///
/// Raw mode and the alternate screen are restored even when the loop fails.
#[instrument(skip_all)]
pub fn run_tui(session: GameSession) -> Result<()> {
    info!("Starting Strictly 2048 TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(io::stdout());
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(session);
    let res = run_loop(&mut terminal, &mut app);
    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        score = app.session().score(),
        high_score = app.session().high_score(),
        "TUI exited"
    );
    res
}

/// Draw, wait for a key, apply it. Key release events are skipped.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = map_key(key.code) {
                app.handle_action(action);
            }
        }
    }
    Ok(())
}
