//! Grid module - the locked-cell playfield
//!
//! The grid is a fixed 10x20 field where each cell is empty or carries the
//! shape tag of the block locked there. It uses a flat row-major array for
//! cache locality and zero allocation.
//!
//! Ownership discipline: the engine owns the canonical grid and is the only
//! writer; pieces and blocks receive `&Grid` for collision checks. A cell
//! is non-empty exactly when a locked block sits at that integer position -
//! the active piece is never written here.

use arrayvec::ArrayVec;

use blockfall_types::{ShapeKind, COLUMNS, ROWS};

/// A cell on the playfield: empty, or the shape tag of a locked block.
pub type Cell = Option<ShapeKind>;

/// Total number of cells on the field
const GRID_SIZE: usize = (COLUMNS * ROWS) as usize;

/// The playfield - 10 columns x 20 rows of locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= COLUMNS || y < 0 || y >= ROWS {
            return None;
        }
        Some((y * COLUMNS + x) as usize)
    }

    /// Get the cell at (x, y), or `None` when the coordinates are outside
    /// the field (including the spawn area above row 0).
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Returns false when the coordinates are
    /// outside the field; writing outside the field is a contract violation
    /// and trips an assertion in debug builds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => {
                debug_assert!(false, "grid write outside the field at ({x}, {y})");
                false
            }
        }
    }

    /// True when (x, y) holds a locked block. Coordinates outside the field
    /// read as unoccupied, so spawn-area positions (y < 0) never collide.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < 0 || y >= ROWS {
            return false;
        }
        let start = (y * COLUMNS) as usize;
        let end = start + COLUMNS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Scan every row and return the indices of all full rows, top to
    /// bottom. A single lock can complete at most four rows (a piece spans
    /// at most four), so the result fits in a fixed-capacity vector.
    pub fn full_rows(&self) -> ArrayVec<i32, 4> {
        let mut full = ArrayVec::new();
        for y in 0..ROWS {
            if self.is_row_full(y) {
                full.push(y);
            }
        }
        full
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Flat view of all cells, row-major (for renderers and tests)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
