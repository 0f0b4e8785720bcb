//! Piece module - the active falling tetromino
//!
//! A piece is four blocks sharing one shape identity. Translation is
//! all-or-nothing: a collision on any block rejects the whole move.
//! Rotation validates all four candidate positions before committing any
//! of them. The piece only reads the grid; writing locked cells is the
//! engine's job.

use blockfall_types::{ShapeKind, COLUMNS, ROWS, SPAWN_OFFSET};

use crate::block::{Block, Pos};
use crate::grid::Grid;

/// Result of a one-row gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece shifted down one row.
    Moved,
    /// The piece could not move down: this is the lock event. The piece is
    /// left where it is and the engine writes it into the grid.
    Landed,
}

/// The active falling piece: a shape identity and its four blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    blocks: [Block; 4],
}

impl Piece {
    /// Create a piece of the given shape at the spawn position (centered,
    /// partly above the visible field).
    pub fn spawn(kind: ShapeKind) -> Self {
        let (ox, oy) = SPAWN_OFFSET;
        let blocks = kind
            .offsets()
            .map(|(dx, dy)| Block::new(kind, Pos::new(ox + dx, oy + dy)));
        Self { kind, blocks }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// The rotation pivot: the first block's position.
    pub fn pivot(&self) -> Pos {
        self.blocks[0].pos
    }

    fn any_horizontal_collision(&self, grid: &Grid, amount: i32) -> bool {
        self.blocks
            .iter()
            .any(|block| block.horizontal_collides(block.pos.x + amount, grid))
    }

    fn any_vertical_collision(&self, grid: &Grid, amount: i32) -> bool {
        self.blocks
            .iter()
            .any(|block| block.vertical_collides(block.pos.y + amount, grid))
    }

    /// Shift the piece one column left or right (`amount` in {-1, +1}).
    /// All four blocks move together or not at all; a rejected move is a
    /// silent no-op. Returns whether the piece moved.
    pub fn move_horizontal(&mut self, grid: &Grid, amount: i32) -> bool {
        if self.any_horizontal_collision(grid, amount) {
            return false;
        }
        for block in &mut self.blocks {
            block.pos.x += amount;
        }
        true
    }

    /// Gravity step: shift all blocks down one row, or report the lock
    /// event if any block would collide. Positions are untouched on
    /// [`DropOutcome::Landed`].
    pub fn move_down(&mut self, grid: &Grid) -> DropOutcome {
        if self.any_vertical_collision(grid, 1) {
            return DropOutcome::Landed;
        }
        for block in &mut self.blocks {
            block.pos.y += 1;
        }
        DropOutcome::Moved
    }

    /// Turn the piece 90 degrees around its pivot.
    ///
    /// The square piece never rotates. Otherwise all four candidate
    /// positions are computed first and each is checked for horizontal
    /// bounds, grid occupancy, and the floor; if any candidate fails the
    /// rotation aborts with no mutation. There are no wall-kick retries.
    /// Candidates are not checked against the piece's own current cells -
    /// those are never in the grid, so a piece cannot collide with itself.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        if self.kind == ShapeKind::O {
            return false;
        }

        let pivot = self.pivot();
        let candidates = self.blocks.map(|block| block.rotated(pivot));

        for pos in candidates {
            if pos.x < 0 || pos.x >= COLUMNS {
                return false;
            }
            if grid.is_occupied(pos.x, pos.y) {
                return false;
            }
            if pos.y >= ROWS {
                return false;
            }
        }

        for (block, pos) in self.blocks.iter_mut().zip(candidates) {
            block.pos = pos;
        }
        true
    }
}
