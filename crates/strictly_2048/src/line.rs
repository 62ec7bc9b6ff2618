//! Line compression and merging.
//!
//! Every move reduces to the same operation on each of the four lines of
//! the board: the line is oriented so that tiles travel toward index 0,
//! merged, and written back. Mirroring for Right/Down happens in the
//! engine, never here.

use super::board::{SIZE, Tile};
use tracing::instrument;

/// A single row or column, oriented toward index 0.
pub type Line = [Tile; SIZE];

/// Result of merging one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    /// The line after compress, merge and compress.
    line: Line,
    /// Whether anything in the line changed.
    moved: bool,
    /// Sum of the tiles created by merges.
    score: u64,
}

impl LineMerge {
    /// The merged line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Whether anything in the line changed.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Points earned by merges in this line.
    pub fn score(&self) -> u64 {
        self.score
    }
}

/// Merges a line leftward.
///
/// 1. Drop empty cells, keeping the order of the rest.
/// 2. One left-to-right pass: each pair of equal neighbours becomes the
///    doubled value on the left and an empty cell on the right. A merged
///    tile is not compared again, so `[2, 2, 2, 2]` yields `[4, 4, 0, 0]`.
///    A pair whose sum does not fit in a [`Tile`] stays unmerged.
/// 3. Drop the new empty cells and right-pad with zeros.
#[instrument(level = "trace")]
pub fn merge_line(input: Line) -> LineMerge {
    let mut tiles = compress(&input);
    let mut moved = padded(&tiles) != input;
    let mut score = 0u64;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1]
            && let Some(doubled) = tiles[i].checked_mul(2)
        {
            tiles[i] = doubled;
            score += u64::from(doubled);
            tiles[i + 1] = 0;
            moved = true;
            i += 2;
        } else {
            i += 1;
        }
    }

    let line = padded(&compress(&tiles));
    LineMerge { line, moved, score }
}

fn compress(line: &[Tile]) -> Vec<Tile> {
    line.iter().copied().filter(|&v| v != 0).collect()
}

fn padded(tiles: &[Tile]) -> Line {
    let mut line = [0; SIZE];
    line[..tiles.len()].copy_from_slice(tiles);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_merge() {
        let merged = merge_line([2, 2, 2, 2]);
        assert_eq!(merged.line(), [4, 4, 0, 0]);
        assert!(merged.moved());
        assert_eq!(merged.score(), 8);
    }

    #[test]
    fn test_compress_then_merge() {
        let merged = merge_line([0, 2, 0, 2]);
        assert_eq!(merged.line(), [4, 0, 0, 0]);
        assert!(merged.moved());
        assert_eq!(merged.score(), 4);
    }

    #[test]
    fn test_slide_without_merge() {
        let merged = merge_line([0, 2, 0, 4]);
        assert_eq!(merged.line(), [2, 4, 0, 0]);
        assert!(merged.moved());
        assert_eq!(merged.score(), 0);
    }

    #[test]
    fn test_packed_line_does_not_move() {
        let merged = merge_line([2, 4, 8, 16]);
        assert_eq!(merged.line(), [2, 4, 8, 16]);
        assert!(!merged.moved());
        assert_eq!(merged.score(), 0);
    }

    #[test]
    fn test_empty_line_does_not_move() {
        let merged = merge_line([0, 0, 0, 0]);
        assert_eq!(merged.line(), [0, 0, 0, 0]);
        assert!(!merged.moved());
    }

    #[test]
    fn test_merged_tile_not_merged_again() {
        // 4 from the 2+2 merge must not combine with the existing 4.
        let merged = merge_line([2, 2, 4, 0]);
        assert_eq!(merged.line(), [4, 4, 0, 0]);
        assert_eq!(merged.score(), 4);
    }

    #[test]
    fn test_leftmost_pair_wins() {
        let merged = merge_line([4, 4, 4, 0]);
        assert_eq!(merged.line(), [8, 4, 0, 0]);
        assert_eq!(merged.score(), 8);
    }

    #[test]
    fn test_pair_too_large_to_double_stays_put() {
        let big = 1 << 31;
        let merged = merge_line([big, big, 0, 0]);
        assert_eq!(merged.line(), [big, big, 0, 0]);
        assert!(!merged.moved());
        assert_eq!(merged.score(), 0);

        let merged = merge_line([0, big, big, 2]);
        assert_eq!(merged.line(), [big, big, 2, 0]);
        assert!(merged.moved());
        assert_eq!(merged.score(), 0);
    }

    #[test]
    fn test_largest_doubling_tile_merges() {
        let merged = merge_line([1 << 30, 1 << 30, 0, 0]);
        assert_eq!(merged.line(), [1 << 31, 0, 0, 0]);
        assert_eq!(merged.score(), 1 << 31);
    }

    #[test]
    fn test_merge_across_gap() {
        let merged = merge_line([8, 0, 0, 8]);
        assert_eq!(merged.line(), [16, 0, 0, 0]);
        assert_eq!(merged.score(), 16);
    }
}
