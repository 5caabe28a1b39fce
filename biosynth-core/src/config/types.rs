//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LCD width in characters; every screen update writes two lines of this
/// width.
pub const LCD_COLS: usize = 16;

/// UI refresh period. The banner, section navigation checks, and LED
/// refresh all run on this timer.
pub const UI_REFRESH_MS: u32 = 40;

/// How a performer commits a section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdvanceMode {
    /// Encoder proposes a section; encoder button confirms within the
    /// confirmation window, otherwise the proposal reverts.
    #[default]
    EncoderConfirm,
    /// Foot pedal advances by one section, committing immediately.
    FootPedal,
}

/// Instrument configuration for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Board identifier; displayed 1-based and sent in telemetry lines.
    pub board_id: u8,
    /// Biosensor sampling period in milliseconds.
    pub sample_period_ms: u32,
    /// How long a proposed section change waits for confirmation before
    /// reverting.
    pub confirmation_delay_ms: u32,
    /// How long the opening banner stays on screen.
    pub opening_message_ms: u32,
    /// Boot-time project selection window.
    pub selection_window_ms: u32,
    /// How long the selected-project announcement stays on screen before
    /// the loop starts.
    pub announce_ms: u32,
    /// Record sensor samples to storage.
    pub logging: bool,
    /// Section advance mode.
    pub advance: AdvanceMode,
    /// Emit normalized sensor lines on the telemetry sink.
    pub telemetry: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_id: 0,
            sample_period_ms: 10,
            confirmation_delay_ms: 3000,
            opening_message_ms: 3000,
            selection_window_ms: 2000,
            announce_ms: 1000,
            logging: true,
            advance: AdvanceMode::EncoderConfirm,
            telemetry: false,
        }
    }
}
