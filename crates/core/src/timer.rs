//! Timer module - polled countdown used for gravity and input repeat
//!
//! Timers are not concurrency primitives: the engine advances each one once
//! per tick with an explicit delta, and expiry is detected by comparing the
//! accumulated elapsed time against the duration. This keeps every run
//! deterministic under a fixed tick sequence.

/// A polled countdown with an optional auto-repeat.
///
/// `update` fires at most once per call: a delta far larger than the
/// duration still yields a single expiry, with the accumulator reset to
/// zero rather than carrying a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    duration_ms: u32,
    elapsed_ms: u32,
    repeat: bool,
    active: bool,
}

impl Timer {
    /// Create an inactive timer. `repeat` controls whether an expiry
    /// re-arms the timer or deactivates it until the next `activate`.
    pub fn new(duration_ms: u32, repeat: bool) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
            repeat,
            active: false,
        }
    }

    /// Arm the timer and reset its accumulator.
    pub fn activate(&mut self) {
        self.active = true;
        self.elapsed_ms = 0;
    }

    /// Disarm the timer. The accumulator is discarded on the next activate.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Change the duration while the timer may be armed. Takes effect at
    /// the next expiry check, not retroactively: an accumulator already
    /// past the new duration fires on the next update.
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Advance by `delta_ms`. Returns true when the timer expired during
    /// this update; repeating timers reset and stay armed, one-shot timers
    /// deactivate.
    pub fn update(&mut self, delta_ms: u32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.duration_ms {
            if self.repeat {
                self.elapsed_ms = 0;
            } else {
                self.active = false;
            }
            return true;
        }
        false
    }
}
