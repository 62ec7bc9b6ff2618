//! Core board type for 2048.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Face value of a single cell. Zero means the cell is empty.
pub type Tile = u32;

/// 4×4 2048 board.
///
/// Cells are addressed as `(row, col)`, rows top to bottom and columns
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Tile; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board {
        cells: [[0; SIZE]; SIZE],
    };

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Tile; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the tile at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the tile at `(row, col)`.
    ///
    /// Out-of-bounds coordinates are a caller bug and panic, like slice
    /// indexing.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row][col] = value;
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Tile; SIZE]; SIZE] {
        &self.cells
    }

    /// Copies out row `row`.
    pub fn row(&self, row: usize) -> [Tile; SIZE] {
        self.cells[row]
    }

    /// Copies out column `col`, top to bottom.
    pub fn column(&self, col: usize) -> [Tile; SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Overwrites row `row`.
    pub fn set_row(&mut self, row: usize, line: [Tile; SIZE]) {
        self.cells[row] = line;
    }

    /// Overwrites column `col`, top to bottom.
    pub fn set_column(&mut self, col: usize, line: [Tile; SIZE]) {
        for (row, value) in line.into_iter().enumerate() {
            self.cells[row][col] = value;
        }
    }

    /// Checks if the cell at `(row, col)` is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// Empty cells in row-major order.
    #[instrument(level = "trace", skip(self))]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_empty(row, col))
            .collect()
    }

    /// Checks if every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of nonzero cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Sum of every cell value.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Highest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Formats the board as a human-readable grid, `.` for empty cells.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>5}", ".")
                    } else {
                        format!("{:>5}", v)
                    }
                })
                .collect();
            result.push_str(&cells.join(" "));
            if i + 1 < SIZE {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
