//! Scoring module - classic line-clear scoring and level progression
//!
//! Pure lookup functions; the engine holds the running totals and calls in
//! here on every scoring event.

use blockfall_types::{
    LEVEL_SPEEDUP_DENOMINATOR, LEVEL_SPEEDUP_NUMERATOR, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_DENOMINATOR, SOFT_DROP_NUMERATOR,
};

/// Points for clearing `lines` rows at once at the given level.
/// `lines` outside 1-4 scores nothing.
pub fn line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize] * level
}

/// Whether the running total has crossed the next level threshold.
///
/// Levels advance when `total_lines / 10` reaches the current level, and
/// only one step per scoring event: a multi-clear jumping from 19 to 21
/// lines still levels up once.
pub fn level_up_due(total_lines: u32, level: u32) -> bool {
    total_lines / LINES_PER_LEVEL >= level
}

/// Gravity interval after a level-up: 3/4 of the current one, in integer
/// milliseconds.
pub fn next_drop_interval(interval_ms: u32) -> u32 {
    interval_ms * LEVEL_SPEEDUP_NUMERATOR / LEVEL_SPEEDUP_DENOMINATOR
}

/// Soft-drop interval for a gravity interval: 3/10 of it.
pub fn soft_drop_interval(interval_ms: u32) -> u32 {
    interval_ms * SOFT_DROP_NUMERATOR / SOFT_DROP_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_line_scores() {
        assert_eq!(line_score(1, 1), 40);
        assert_eq!(line_score(2, 1), 100);
        assert_eq!(line_score(3, 1), 300);
        assert_eq!(line_score(4, 1), 1200);

        // Multiplied by the level, which starts at 1.
        assert_eq!(line_score(1, 3), 120);
        assert_eq!(line_score(4, 3), 3600);
    }

    #[test]
    fn degenerate_line_counts_score_nothing() {
        assert_eq!(line_score(0, 5), 0);
        assert_eq!(line_score(5, 5), 0);
    }

    #[test]
    fn level_threshold() {
        assert!(!level_up_due(9, 1));
        assert!(level_up_due(10, 1));
        assert!(level_up_due(11, 1));
        assert!(!level_up_due(19, 2));
        // 21 lines at level 2 is due exactly one step, not two.
        assert!(level_up_due(21, 2));
        assert!(!level_up_due(21, 3));
    }

    #[test]
    fn speedup_is_three_quarters() {
        assert_eq!(next_drop_interval(800), 600);
        assert_eq!(next_drop_interval(600), 450);
        // Integer milliseconds truncate.
        assert_eq!(next_drop_interval(450), 337);
    }

    #[test]
    fn soft_drop_is_three_tenths() {
        assert_eq!(soft_drop_interval(800), 240);
        assert_eq!(soft_drop_interval(600), 180);
    }
}
