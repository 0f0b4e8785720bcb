//! Core engine module - pure, deterministic, and testable
//!
//! This crate holds the complete falling-block rules: the playfield grid,
//! the active piece's movement/rotation/collision behavior, line-clear
//! detection with downward compaction, and scoring/leveling. It has zero
//! dependencies on rendering, input polling, or windowing; those stay
//! outside and talk to the engine through [`Game::tick`], the shape
//! supplier, and the score sink.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 field of locked cells, sole property of the engine
//! - [`block`]: a single piece cell with its own position and collision
//!   queries
//! - [`piece`]: the active tetromino - atomic translation and rotation
//! - [`timer`]: polled countdown state machines driving gravity and input
//!   repeat
//! - [`scoring`]: classic line-clear table and level progression
//! - [`game`]: the engine tying it all together, one `tick` per frame
//!
//! # Rules
//!
//! - Gravity moves the piece one row per expiry of a repeating timer
//!   (800ms at level 1, x0.75 per level-up; holding down switches to 0.3x).
//! - Illegal moves and rotations are silently rejected no-ops; there are
//!   no error values in the engine.
//! - Rotation is a single fixed-direction 90 degree step around the first
//!   block, all four blocks or none. The square piece never rotates, and
//!   there are no wall kicks.
//! - A piece that can no longer fall locks where it is; full rows are
//!   destroyed, survivors fall by the number of cleared rows below them,
//!   and the grid is rebuilt from the surviving block positions.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::{InputState, ShapeKind};
//!
//! let mut game = Game::new(
//!     || ShapeKind::T,
//!     |lines, score, level| println!("{lines} lines, {score} pts, level {level}"),
//! );
//!
//! // Drive one frame with the left key held.
//! let input = InputState { left: true, ..Default::default() };
//! game.tick(16, input);
//! ```

pub mod block;
pub mod game;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod timer;

pub use blockfall_types as types;

// Re-export the commonly used types for convenience
pub use block::{Block, Pos};
pub use game::{Game, ScoreSink, ShapeSupplier};
pub use grid::{Cell, Grid};
pub use piece::{DropOutcome, Piece};
pub use scoring::{level_up_due, line_score, next_drop_interval, soft_drop_interval};
pub use timer::Timer;
