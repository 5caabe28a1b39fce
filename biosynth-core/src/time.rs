//! Polled millisecond timers
//!
//! All timing in the steady-state loop is non-blocking: every timer is an
//! independent countdown polled each iteration with the current timestamp.
//! Timestamps are `u32` milliseconds and wrap; arithmetic uses
//! `wrapping_sub` so a rollover mid-window does not produce a spurious
//! elapse.

/// Monotonic millisecond time source.
///
/// The two boot-time blocking windows (project selection, announcement)
/// poll this directly; everything else receives `now_ms` from the caller.
pub trait Clock {
    /// Current monotonic time in milliseconds. Wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;
}

/// A stopwatch-style timer polled with an external timestamp.
///
/// Stopped timers never report elapse. `has_elapsed_restart` gives the
/// "has passed N ms, auto-reset" semantics used by the sampling and UI
/// refresh periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    started_at_ms: u32,
    running: bool,
}

impl Timer {
    /// Create a stopped timer.
    pub const fn new() -> Self {
        Self {
            started_at_ms: 0,
            running: false,
        }
    }

    /// Start (or restart) the timer at `now_ms`.
    pub fn start(&mut self, now_ms: u32) {
        self.started_at_ms = now_ms;
        self.running = true;
    }

    /// Stop the timer. A stopped timer reports zero elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the timer is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed milliseconds since start, or 0 when stopped.
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        if self.running {
            now_ms.wrapping_sub(self.started_at_ms)
        } else {
            0
        }
    }

    /// Whether at least `period_ms` has passed since start.
    pub fn has_elapsed(&self, now_ms: u32, period_ms: u32) -> bool {
        self.running && self.elapsed_ms(now_ms) >= period_ms
    }

    /// Whether at least `period_ms` has passed since start, restarting
    /// the window when it has.
    ///
    /// The restart anchors at `now_ms` rather than the period boundary;
    /// the loop polls far faster than any configured period, so drift is
    /// below a tick.
    pub fn has_elapsed_restart(&mut self, now_ms: u32, period_ms: u32) -> bool {
        if self.has_elapsed(now_ms, period_ms) {
            self.start(now_ms);
            true
        } else {
            false
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
