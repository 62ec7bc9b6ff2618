//! Terminal-state detection for 2048.

use super::board::{Board, SIZE};
use tracing::instrument;

/// Checks whether no move can change the board.
///
/// True only when every cell holds a tile and no two horizontally or
/// vertically adjacent tiles are equal.
#[instrument(level = "trace")]
pub fn is_game_over(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }

    let rows = board.rows();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = rows[row][col];
            if col + 1 < SIZE && value == rows[row][col + 1] {
                return false;
            }
            if row + 1 < SIZE && value == rows[row + 1][col] {
                return false;
            }
        }
    }

    true
}
