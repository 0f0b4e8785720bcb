//! Shared types module - playfield geometry, timing, and shape data
//!
//! Everything in this crate is plain configuration data with no behavior
//! beyond small lookups, so it can be consumed anywhere (engine, renderers,
//! previews) without pulling in the engine itself.
//!
//! # Playfield Geometry
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Cell size**: 40 pixels (render hint only; the engine never uses it)
//!
//! Pieces spawn translated by [`SPAWN_OFFSET`], so freshly spawned blocks
//! may sit above the visible field at negative row indices.
//!
//! # Timing Constants
//!
//! All timing values are integer milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_INTERVAL_MS` | 800 | Gravity interval at level 1 |
//! | `HORIZONTAL_REPEAT_MS` | 200 | Cooldown between held left/right moves |
//! | `ROTATE_REPEAT_MS` | 200 | Cooldown between held rotations |
//!
//! Each level-up scales the gravity interval by 3/4, and the soft-drop
//! interval is always 3/10 of the current gravity interval (both computed
//! in integer milliseconds).
//!
//! # Scoring
//!
//! Classic line-clear table ([`LINE_SCORES`]), multiplied by the current
//! level. The level starts at 1 and increases once per full
//! [`LINES_PER_LEVEL`] lines cleared in total.

/// Playfield width in cells (10 columns)
pub const COLUMNS: i32 = 10;

/// Playfield height in cells (20 rows)
pub const ROWS: i32 = 20;

/// Cell edge length in pixels, for renderers. The engine itself works in
/// grid coordinates and never reads this.
pub const CELL_SIZE: u32 = 40;

/// Gravity interval at level 1 (800ms per row)
pub const INITIAL_DROP_INTERVAL_MS: u32 = 800;

/// Cooldown between horizontal moves while a key is held (200ms)
pub const HORIZONTAL_REPEAT_MS: u32 = 200;

/// Cooldown between rotations while the rotate key is held (200ms)
pub const ROTATE_REPEAT_MS: u32 = 200;

/// Level-up gravity scaling numerator (3/4 = interval x 0.75 per level)
pub const LEVEL_SPEEDUP_NUMERATOR: u32 = 3;

/// Level-up gravity scaling denominator
pub const LEVEL_SPEEDUP_DENOMINATOR: u32 = 4;

/// Soft-drop interval numerator (3/10 = 0.3x the gravity interval)
pub const SOFT_DROP_NUMERATOR: u32 = 3;

/// Soft-drop interval denominator
pub const SOFT_DROP_DENOMINATOR: u32 = 10;

/// Lines required per level-up (10)
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (classic values)
///
/// Base points for clearing N rows at once:
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// Points are multiplied by the current level (levels start at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Spawn translation applied to every shape offset: horizontally centered,
/// one row above the visible field.
pub const SPAWN_OFFSET: (i32, i32) = (COLUMNS / 2, -1);

/// The seven falling-piece shapes
///
/// Each shape owns its four relative block offsets and a render color:
/// - **I**: Cyan, vertical bar
/// - **O**: Yellow, 2x2 square (never rotates)
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All shapes, in a fixed order (handy for suppliers and tests).
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// The four block offsets relative to the spawn origin.
    ///
    /// The first offset is the rotation pivot. Negative y points above the
    /// origin (screen coordinates, y grows downward).
    pub const fn offsets(&self) -> [(i32, i32); 4] {
        match self {
            ShapeKind::I => [(0, 0), (0, -1), (0, -2), (0, 1)],
            ShapeKind::O => [(0, 0), (0, -1), (1, 0), (1, -1)],
            ShapeKind::T => [(0, 0), (-1, 0), (1, 0), (0, -1)],
            ShapeKind::S => [(0, 0), (-1, 0), (0, -1), (1, -1)],
            ShapeKind::Z => [(0, 0), (1, 0), (0, -1), (-1, -1)],
            ShapeKind::J => [(0, 0), (0, -1), (0, 1), (-1, 1)],
            ShapeKind::L => [(0, 0), (0, -1), (0, 1), (1, 1)],
        }
    }

    /// Render color tag for this shape. The engine carries it through lock
    /// and line clears but never inspects it.
    pub const fn color(&self) -> Rgb {
        match self {
            ShapeKind::I => Rgb(108, 198, 217),
            ShapeKind::O => Rgb(241, 230, 13),
            ShapeKind::T => Rgb(123, 33, 127),
            ShapeKind::S => Rgb(101, 179, 46),
            ShapeKind::Z => Rgb(229, 27, 32),
            ShapeKind::J => Rgb(32, 75, 155),
            ShapeKind::L => Rgb(240, 126, 19),
        }
    }

    /// Parse a shape from its letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("T"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Lowercase letter for this shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Plain RGB triple used as the per-shape render tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Held-key snapshot consumed once per tick.
///
/// The engine does not poll the keyboard; the embedding frontend samples
/// whatever input source it has and hands the result in. Repeat-rate
/// limiting for held keys happens inside the engine via cooldown timers,
/// so this snapshot carries levels, not edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub rotate: bool,
    pub down: bool,
}
