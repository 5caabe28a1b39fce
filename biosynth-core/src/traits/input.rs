//! Encoder, button, and potentiometer traits
//!
//! Debouncing and quadrature decoding live in the board crates. Button
//! `pressed()` methods report a one-shot edge, not a level: a single
//! physical press yields `true` on exactly one poll.

/// Detented rotary encoder with a settable logical position.
pub trait Encoder {
    /// Poll the encoder and return its logical position wrapped to
    /// `[0, wrap)`. The wrap is the active project's section count, so
    /// the returned value is always a valid section index.
    fn update(&mut self, wrap: u8) -> u8;

    /// Force the logical position. Used to re-converge the encoder with
    /// the committed section when a confirmation window times out.
    fn set_position(&mut self, value: u8);
}

/// Encoder push button and foot pedal.
pub trait Buttons {
    /// One-shot press edge of the encoder button.
    fn encoder_pressed(&mut self) -> bool;

    /// One-shot press edge of the foot pedal.
    fn pedal_pressed(&mut self) -> bool;

    /// Current pedal level, recorded alongside sensor samples in pedal
    /// mode.
    fn pedal_level(&self) -> bool;
}

/// Volume potentiometer on the audio shield.
pub trait VolumePot {
    /// Raw ADC reading, 10-bit range `[0, 1023]`.
    fn read(&mut self) -> u16;
}
