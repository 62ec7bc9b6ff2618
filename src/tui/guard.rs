//! Terminal restoration on every exit path.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io::Write;
use tracing::{debug, warn};

/// Leaves raw mode and the alternate screen when dropped.
///
/// Created right after raw mode is enabled, so an early `?` return still
/// hands the player back a usable terminal. Each restore step runs even if
/// an earlier one fails.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Guards the terminal that `out` writes to.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}
