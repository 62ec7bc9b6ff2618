//! Bounded undo history of board snapshots.

use super::board::Board;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Default number of snapshots kept for undo.
pub const DEFAULT_UNDO_LIMIT: usize = 256;

/// Most-recent-last stack of board snapshots with a fixed capacity.
///
/// When full, pushing evicts the oldest snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    snapshots: VecDeque<Board>,
    limit: usize,
}

/// Receipt for a speculative push, used to roll it back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct Pushed {
    evicted: Option<Board>,
}

impl UndoHistory {
    /// Creates an empty history holding at most `limit` snapshots.
    ///
    /// A limit of zero is raised to one.
    #[instrument]
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            snapshots: VecDeque::with_capacity(limit.min(DEFAULT_UNDO_LIMIT)),
            limit,
        }
    }

    /// Maximum number of snapshots kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of snapshots currently stored.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recent snapshot, if any.
    pub fn peek(&self) -> Option<&Board> {
        self.snapshots.back()
    }

    /// Pushes a snapshot, evicting the oldest one when full.
    pub(crate) fn push(&mut self, board: Board) -> Pushed {
        let evicted = if self.snapshots.len() == self.limit {
            self.snapshots.pop_front()
        } else {
            None
        };
        if evicted.is_some() {
            debug!(limit = self.limit, "Undo history full, evicting oldest snapshot");
        }
        self.snapshots.push_back(board);
        Pushed { evicted }
    }

    /// Undoes a [`push`](Self::push), restoring any evicted snapshot.
    pub(crate) fn rollback(&mut self, pushed: Pushed) {
        self.snapshots.pop_back();
        if let Some(board) = pushed.evicted {
            self.snapshots.push_front(board);
        }
    }

    /// Removes and returns the most recent snapshot.
    pub(crate) fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop_back()
    }

    /// Drops every snapshot.
    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(value: u32) -> Board {
        let mut board = Board::new();
        board.set(0, 0, value);
        board
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = UndoHistory::default();
        let _ = history.push(board_with(2));
        let _ = history.push(board_with(4));
        assert_eq!(history.pop(), Some(board_with(4)));
        assert_eq!(history.pop(), Some(board_with(2)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = UndoHistory::with_limit(2);
        let _ = history.push(board_with(2));
        let _ = history.push(board_with(4));
        let _ = history.push(board_with(8));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(board_with(8)));
        assert_eq!(history.pop(), Some(board_with(4)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_rollback_restores_evicted() {
        let mut history = UndoHistory::with_limit(2);
        let _ = history.push(board_with(2));
        let _ = history.push(board_with(4));
        let before = history.clone();

        let pushed = history.push(board_with(8));
        history.rollback(pushed);

        assert_eq!(history, before);
    }

    #[test]
    fn test_zero_limit_raised_to_one() {
        let mut history = UndoHistory::with_limit(0);
        assert_eq!(history.limit(), 1);
        let _ = history.push(board_with(2));
        assert_eq!(history.peek(), Some(&board_with(2)));
    }
}
