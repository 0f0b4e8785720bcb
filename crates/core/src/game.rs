//! Game module - the playfield engine
//!
//! Owns the canonical grid, the active piece, the locked-block collection,
//! the three countdown timers, and the score state. One call to
//! [`Game::tick`] is one logical frame: resolve the held-key snapshot,
//! advance the timers, and let the gravity timer drive the piece down;
//! landing locks the piece, resolves full rows, and spawns a replacement
//! synchronously.
//!
//! The two collaborators the engine does not own come in as callbacks:
//! a shape supplier (the bag/randomizer policy stays external) and a score
//! sink that receives `(lines, score, level)` after every scoring event and
//! once with the initial zero state.

use blockfall_types::{
    InputState, ShapeKind, HORIZONTAL_REPEAT_MS, INITIAL_DROP_INTERVAL_MS, ROTATE_REPEAT_MS,
};

use crate::block::Block;
use crate::grid::Grid;
use crate::piece::{DropOutcome, Piece};
use crate::scoring::{level_up_due, line_score, next_drop_interval, soft_drop_interval};
use crate::timer::Timer;

/// External supplier of the next shape, called once per spawn.
pub type ShapeSupplier = Box<dyn FnMut() -> ShapeKind>;

/// External score display, called with (lines, score, level).
pub type ScoreSink = Box<dyn FnMut(u32, u32, u32)>;

/// The falling-block playfield engine.
pub struct Game {
    grid: Grid,
    piece: Piece,
    /// Every block locked into the grid, the authoritative set for the
    /// scan-then-rebuild line clear. The grid mirrors these positions.
    locked: Vec<Block>,

    next_shape: ShapeSupplier,
    on_score: ScoreSink,

    /// Repeating gravity timer; its duration switches between the normal
    /// and soft-drop interval while the down key is held.
    gravity: Timer,
    /// One-shot cooldowns giving held keys a repeat cadence.
    shift: Timer,
    spin: Timer,

    drop_interval_ms: u32,
    fast_interval_ms: u32,
    down_held: bool,

    lines: u32,
    score: u32,
    level: u32,

    /// Set when a lock left blocks above the visible field. The engine
    /// freezes instead of corrupting the grid; end-of-game presentation is
    /// the caller's business.
    topped_out: bool,
}

impl Game {
    /// Create a game: spawns the first piece from the supplier, arms the
    /// gravity timer, and reports the initial zero score to the sink.
    pub fn new(
        next_shape: impl FnMut() -> ShapeKind + 'static,
        on_score: impl FnMut(u32, u32, u32) + 'static,
    ) -> Self {
        let mut next_shape: ShapeSupplier = Box::new(next_shape);
        let piece = Piece::spawn(next_shape());

        let drop_interval_ms = INITIAL_DROP_INTERVAL_MS;
        let mut gravity = Timer::new(drop_interval_ms, true);
        gravity.activate();

        let mut game = Self {
            grid: Grid::new(),
            piece,
            locked: Vec::new(),
            next_shape,
            on_score: Box::new(on_score),
            gravity,
            shift: Timer::new(HORIZONTAL_REPEAT_MS, false),
            spin: Timer::new(ROTATE_REPEAT_MS, false),
            drop_interval_ms,
            fast_interval_ms: soft_drop_interval(drop_interval_ms),
            down_held: false,
            lines: 0,
            score: 0,
            level: 1,
            topped_out: false,
        };
        game.emit_score();
        game
    }

    /// One logical frame: input resolution, then timer advancement. The
    /// gravity timer's expiry moves the piece down and may lock it, clear
    /// rows, and spawn the next piece - all within this call.
    pub fn tick(&mut self, delta_ms: u32, input: InputState) {
        if self.topped_out {
            return;
        }

        self.handle_input(input);

        if self.gravity.update(delta_ms) {
            self.apply_gravity();
        }
        self.shift.update(delta_ms);
        self.spin.update(delta_ms);
    }

    /// Resolve the held-key snapshot. Horizontal moves and rotation are
    /// rate-limited by their cooldown timers: a held key re-triggers at the
    /// cooldown cadence rather than on key edges. The down key only swaps
    /// the gravity rate.
    fn handle_input(&mut self, input: InputState) {
        if !self.shift.is_active() {
            if input.left {
                self.piece.move_horizontal(&self.grid, -1);
                self.shift.activate();
            }
            if input.right {
                self.piece.move_horizontal(&self.grid, 1);
                self.shift.activate();
            }
        }

        if !self.spin.is_active() && input.rotate {
            self.piece.rotate(&self.grid);
            self.spin.activate();
        }

        if input.down && !self.down_held {
            self.down_held = true;
            self.gravity.set_duration(self.fast_interval_ms);
        }
        if !input.down && self.down_held {
            self.down_held = false;
            self.gravity.set_duration(self.drop_interval_ms);
        }
    }

    fn apply_gravity(&mut self) {
        match self.piece.move_down(&self.grid) {
            DropOutcome::Moved => {}
            DropOutcome::Landed => self.lock_piece(),
        }
    }

    /// The lock event: transfer the piece's blocks to the grid and the
    /// locked collection, resolve full rows, then spawn the replacement.
    fn lock_piece(&mut self) {
        for block in self.piece.blocks() {
            if block.pos.y < 0 {
                // Locked above the visible field: freeze rather than
                // write outside the grid. The block still joins the live
                // set so the frozen frame renders the whole piece.
                self.topped_out = true;
            } else {
                self.grid.set(block.pos.x, block.pos.y, Some(block.kind));
            }
            self.locked.push(*block);
        }

        self.resolve_full_rows();
        self.piece = Piece::spawn((self.next_shape)());
    }

    /// Scan-then-rebuild line clear. All full row indices are collected
    /// up front; removing rows one at a time while scanning would corrupt
    /// the offsets of the rows in between.
    fn resolve_full_rows(&mut self) {
        let full = self.grid.full_rows();
        if full.is_empty() {
            return;
        }

        // Destroy every block in a full row.
        self.locked.retain(|block| !full.contains(&block.pos.y));

        // Survivors fall by the number of cleared rows strictly below them.
        for block in &mut self.locked {
            let cleared_below = full.iter().filter(|&&row| row > block.pos.y).count();
            block.pos.y += cleared_below as i32;
        }

        // Rebuild the grid from scratch from the surviving positions.
        // Blocks locked above the field during a top-out stay out of it.
        self.grid.clear();
        for block in &self.locked {
            if block.pos.y >= 0 {
                self.grid.set(block.pos.x, block.pos.y, Some(block.kind));
            }
        }

        self.apply_score(full.len() as u32);
    }

    /// Scoring event for `cleared` rows: bump the totals, level up when the
    /// running line count crosses the next multiple of ten, and retune the
    /// gravity timer live.
    fn apply_score(&mut self, cleared: u32) {
        if cleared == 0 {
            return;
        }
        self.lines += cleared;
        self.score += line_score(cleared, self.level);

        if level_up_due(self.lines, self.level) {
            self.level += 1;
            self.drop_interval_ms = next_drop_interval(self.drop_interval_ms);
            self.fast_interval_ms = soft_drop_interval(self.drop_interval_ms);
            // Respect a soft drop in progress when retuning the live timer.
            self.gravity.set_duration(if self.down_held {
                self.fast_interval_ms
            } else {
                self.drop_interval_ms
            });
        }

        self.emit_score();
    }

    fn emit_score(&mut self) {
        (self.on_score)(self.lines, self.score, self.level);
    }

    /// The canonical grid of locked cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active falling piece.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Every live block: the active piece's four plus all locked blocks.
    /// This is the set a renderer draws.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.piece.blocks().iter().copied().chain(self.locked.iter().copied())
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval (the normal one, ignoring soft drop).
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    #[cfg(test)]
    fn seed_locked(&mut self, x: i32, y: i32, kind: ShapeKind) {
        self.grid.set(x, y, Some(kind));
        self.locked.push(Block::new(kind, crate::block::Pos::new(x, y)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::COLUMNS;
    use std::cell::RefCell;
    use std::rc::Rc;

    type ScoreLog = Rc<RefCell<Vec<(u32, u32, u32)>>>;

    fn game_with(shape: ShapeKind) -> (Game, ScoreLog) {
        let log: ScoreLog = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&log);
        let game = Game::new(
            move || shape,
            move |lines, score, level| sink_log.borrow_mut().push((lines, score, level)),
        );
        (game, log)
    }

    fn fill_row(game: &mut Game, y: i32, kind: ShapeKind) {
        for x in 0..COLUMNS {
            game.seed_locked(x, y, kind);
        }
    }

    #[test]
    fn construction_reports_zero_score() {
        let (_game, log) = game_with(ShapeKind::T);
        assert_eq!(log.borrow().as_slice(), &[(0, 0, 1)]);
    }

    #[test]
    fn single_row_clear_compacts_rows_above() {
        let (mut game, log) = game_with(ShapeKind::T);
        fill_row(&mut game, 15, ShapeKind::I);
        game.seed_locked(3, 14, ShapeKind::O);
        game.seed_locked(4, 13, ShapeKind::O);
        game.seed_locked(0, 16, ShapeKind::S);

        game.resolve_full_rows();

        // Row 15 is gone, the two blocks above dropped exactly one row,
        // and the block below is untouched.
        assert!(!game.grid().is_occupied(3, 14));
        assert!(game.grid().is_occupied(3, 15));
        assert!(game.grid().is_occupied(4, 14));
        assert!(game.grid().is_occupied(0, 16));
        assert_eq!(game.lines(), 1);
        assert_eq!(game.score(), 40);
        assert_eq!(log.borrow().last(), Some(&(1, 40, 1)));
    }

    #[test]
    fn multi_row_clear_offsets_depend_on_rows_below() {
        let (mut game, _log) = game_with(ShapeKind::T);
        fill_row(&mut game, 12, ShapeKind::I);
        fill_row(&mut game, 17, ShapeKind::I);
        game.seed_locked(2, 10, ShapeKind::O); // above both
        game.seed_locked(6, 14, ShapeKind::O); // between them
        game.seed_locked(8, 19, ShapeKind::O); // below both

        game.resolve_full_rows();

        assert!(game.grid().is_occupied(2, 12));
        assert!(game.grid().is_occupied(6, 15));
        assert!(game.grid().is_occupied(8, 19));
        assert_eq!(game.lines(), 2);
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn cleared_blocks_leave_the_live_set() {
        let (mut game, _log) = game_with(ShapeKind::T);
        fill_row(&mut game, 19, ShapeKind::I);
        let live_before = game.blocks().count();

        game.resolve_full_rows();

        // Ten locked blocks destroyed; only the active piece remains.
        assert_eq!(game.blocks().count(), live_before - COLUMNS as usize);
        assert!((0..COLUMNS).all(|x| !game.grid().is_occupied(x, 19)));
    }

    #[test]
    fn tetris_at_level_three_scores_3600() {
        let (mut game, _log) = game_with(ShapeKind::T);
        game.level = 3;
        for y in 16..20 {
            fill_row(&mut game, y, ShapeKind::I);
        }

        game.resolve_full_rows();

        assert_eq!(game.score(), 3600);
        assert_eq!(game.lines(), 4);
    }

    #[test]
    fn level_up_crossing_ten_lines() {
        let (mut game, log) = game_with(ShapeKind::T);
        game.lines = 9;
        let before = game.drop_interval_ms();
        fill_row(&mut game, 19, ShapeKind::I);

        game.resolve_full_rows();

        assert_eq!(game.lines(), 10);
        assert_eq!(game.level(), 2);
        assert_eq!(game.drop_interval_ms(), before * 3 / 4);
        assert_eq!(log.borrow().last(), Some(&(10, 40, 2)));
    }

    #[test]
    fn multi_clear_crossing_two_thresholds_levels_once() {
        let (mut game, _log) = game_with(ShapeKind::T);
        game.lines = 19;
        game.level = 2;
        fill_row(&mut game, 18, ShapeKind::I);
        fill_row(&mut game, 19, ShapeKind::I);

        game.resolve_full_rows();

        assert_eq!(game.lines(), 21);
        assert_eq!(game.level(), 3);
    }

    #[test]
    fn no_score_event_without_full_rows() {
        let (mut game, log) = game_with(ShapeKind::T);
        game.seed_locked(0, 19, ShapeKind::O);

        game.resolve_full_rows();

        // Only the construction-time report.
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(game.lines(), 0);
    }

    #[test]
    fn lock_above_the_field_freezes_and_keeps_blocks_live() {
        let (mut game, log) = game_with(ShapeKind::T);
        // The freshly spawned T sits entirely above row 0; locking it
        // there is the top-out case.
        game.lock_piece();

        assert!(game.topped_out());
        // Nothing was written to the grid, but the whole piece stays in
        // the live set for the frozen frame.
        assert!(game.grid().cells().iter().all(|cell| cell.is_none()));
        assert_eq!(game.locked.len(), 4);

        // Frozen: further frames change nothing and report nothing.
        let reports = log.borrow().len();
        let live = game.blocks().count();
        for _ in 0..100 {
            game.tick(16, InputState { down: true, ..Default::default() });
        }
        assert_eq!(game.lines(), 0);
        assert_eq!(game.blocks().count(), live);
        assert_eq!(log.borrow().len(), reports);
    }

    #[test]
    fn bounds_invariant_holds_after_clears() {
        let (mut game, _log) = game_with(ShapeKind::T);
        fill_row(&mut game, 12, ShapeKind::I);
        fill_row(&mut game, 13, ShapeKind::I);
        game.seed_locked(5, 11, ShapeKind::O);
        game.seed_locked(7, 0, ShapeKind::O);

        game.resolve_full_rows();

        for block in &game.locked {
            assert!((0..COLUMNS).contains(&block.pos.x));
            assert!((0..blockfall_types::ROWS).contains(&block.pos.y));
        }
    }
}
