//! Block module - a single cell of a falling piece
//!
//! A block tracks its own grid-space position and answers collision queries
//! against a hypothetical target position. It never writes the grid; locking
//! is the engine's job.

use blockfall_types::{ShapeKind, COLUMNS, ROWS};

use crate::grid::Grid;

/// A grid-space position. Row 0 is the top of the field; negative y is the
/// spawn area above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Fixed-direction 90 degree turn around the origin: (x, y) -> (-y, x).
    /// With y growing downward this reads as a clockwise quarter turn on
    /// screen. There is no counter-clockwise variant.
    pub const fn rotated_90(self) -> Self {
        Pos {
            x: -self.y,
            y: self.x,
        }
    }
}

/// One cell of a piece: a position plus the shape tag it renders as.
///
/// Owned by exactly one [`Piece`](crate::piece::Piece) while falling; on
/// lock the engine copies it into its locked-block collection and the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub pos: Pos,
    pub kind: ShapeKind,
}

impl Block {
    pub fn new(kind: ShapeKind, pos: Pos) -> Self {
        Self { pos, kind }
    }

    /// Would moving this block to column `target_x` collide?
    ///
    /// True when `target_x` leaves `[0, COLUMNS)` or the cell at
    /// (`target_x`, current row) already holds a locked block. While the
    /// block is still above the field the occupancy lookup reads empty.
    pub fn horizontal_collides(&self, target_x: i32, grid: &Grid) -> bool {
        if target_x < 0 || target_x >= COLUMNS {
            return true;
        }
        grid.is_occupied(target_x, self.pos.y)
    }

    /// Would moving this block to row `target_y` collide?
    ///
    /// True when `target_y` is at or below the floor, or when the target
    /// cell holds a locked block. Negative `target_y` is permitted: pieces
    /// spawn above the field.
    pub fn vertical_collides(&self, target_y: i32, grid: &Grid) -> bool {
        if target_y >= ROWS {
            return true;
        }
        target_y >= 0 && grid.is_occupied(self.pos.x, target_y)
    }

    /// Position after a 90 degree turn around `pivot`. Pure; the block is
    /// not moved - the caller validates all four candidates before
    /// committing any of them.
    pub fn rotated(&self, pivot: Pos) -> Pos {
        let arm = Pos::new(self.pos.x - pivot.x, self.pos.y - pivot.y);
        let turned = arm.rotated_90();
        Pos::new(pivot.x + turned.x, pivot.y + turned.y)
    }
}
