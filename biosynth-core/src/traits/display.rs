//! LCD and LED driver traits
//!
//! The instrument's 16x2 character LCD is local hardware and assumed
//! present; the interface is infallible. Every screen update writes both
//! lines at once so a transition never leaves a stale second line.

/// 16x2 character LCD.
pub trait Lcd {
    /// Replace both display lines. Lines longer than 16 characters are
    /// truncated by the driver.
    fn show(&mut self, line1: &str, line2: &str);

    /// Blank the display.
    fn clear(&mut self);
}

/// Performer-facing status LED driven from the active project's
/// processed level.
pub trait StatusLed {
    /// Set brightness from a level in `[0.0, 1.0]`.
    fn set_level(&mut self, level: f32);
}
