//! Boot-time project selection
//!
//! Runs exactly once, before the control loop starts. The encoder is
//! busy-polled for the configured window; the last discrete reading at
//! timeout decides the project. This is the only blocking wait in the
//! instrument besides the post-selection announcement.

use crate::project::ProjectId;
use crate::time::Clock;
use crate::traits::Encoder;

/// Encoder wrap during selection: one detent per project variant.
const SELECT_WRAP: u8 = 3;

/// Reading that selects the Recorder project.
const RECORDER_READING: u8 = 1;

/// One-shot boot-time project chooser.
pub struct ProjectSelector {
    window_ms: u32,
}

impl ProjectSelector {
    pub const fn new(window_ms: u32) -> Self {
        Self { window_ms }
    }

    /// Poll the encoder until the window closes and map the last reading
    /// to a project.
    ///
    /// Reading 1 selects Recorder; any other reading falls back to
    /// Song of Seven. The fallback is silent and intentional: an
    /// untouched encoder boots the default performance program.
    pub fn select<C: Clock, E: Encoder>(&self, clock: &C, encoder: &mut E) -> ProjectId {
        let started = clock.now_ms();
        let mut reading = 0;

        while clock.now_ms().wrapping_sub(started) < self.window_ms {
            reading = encoder.update(SELECT_WRAP);
        }

        if reading == RECORDER_READING {
            ProjectId::Recorder
        } else {
            ProjectId::SongOfSeven
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock advancing a fixed step on every read.
    struct SteppingClock {
        now: Cell<u32>,
        step: u32,
    }

    impl SteppingClock {
        fn new(step: u32) -> Self {
            Self {
                now: Cell::new(0),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now_ms(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(self.step));
            now
        }
    }

    struct FixedEncoder {
        position: u8,
        polls: u32,
    }

    impl Encoder for FixedEncoder {
        fn update(&mut self, wrap: u8) -> u8 {
            self.polls += 1;
            self.position % wrap
        }

        fn set_position(&mut self, value: u8) {
            self.position = value;
        }
    }

    #[test]
    fn test_reading_one_selects_recorder() {
        let clock = SteppingClock::new(100);
        let mut encoder = FixedEncoder {
            position: 1,
            polls: 0,
        };

        let selector = ProjectSelector::new(2000);
        assert_eq!(selector.select(&clock, &mut encoder), ProjectId::Recorder);
        assert!(encoder.polls > 0);
    }

    #[test]
    fn test_untouched_encoder_selects_default() {
        let clock = SteppingClock::new(100);
        let mut encoder = FixedEncoder {
            position: 0,
            polls: 0,
        };

        let selector = ProjectSelector::new(2000);
        assert_eq!(
            selector.select(&clock, &mut encoder),
            ProjectId::SongOfSeven
        );
    }

    #[test]
    fn test_unrecognized_reading_falls_back_to_default() {
        let clock = SteppingClock::new(100);
        let mut encoder = FixedEncoder {
            position: 2,
            polls: 0,
        };

        let selector = ProjectSelector::new(2000);
        assert_eq!(
            selector.select(&clock, &mut encoder),
            ProjectId::SongOfSeven
        );
    }

    #[test]
    fn test_window_consumes_configured_time() {
        let clock = SteppingClock::new(1);
        let mut encoder = FixedEncoder {
            position: 0,
            polls: 0,
        };

        ProjectSelector::new(2000).select(&clock, &mut encoder);
        // The loop polled until the window closed
        assert!(clock.now.get() >= 2000);
    }
}
