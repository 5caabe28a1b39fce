//! Biosensor trait and sample frame

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One poll of all biosensor channels.
///
/// Raw values are what the session log records; normalized values feed
/// telemetry and the projects. The SCR value is derived from the second
/// skin-conductance channel while the log records the first channel's
/// raw reading, matching the instrument's wiring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorFrame {
    /// Raw heart (PPG) reading.
    pub heart_raw: u16,
    /// Raw first skin-conductance channel.
    pub sc1_raw: u16,
    /// Raw respiration reading.
    pub resp_raw: u16,
    /// Normalized heart signal in `[0.0, 1.0]`.
    pub heart_norm: f32,
    /// Skin conductance response from the second channel.
    pub scr: f32,
    /// Normalized respiration signal in `[0.0, 1.0]`.
    pub resp_norm: f32,
}

/// The biosensor bank. Polling failures are not modeled; the hardware is
/// assumed present once the instrument boots.
pub trait Biosensors {
    /// Poll every channel and return the latest frame.
    fn sample(&mut self) -> SensorFrame;
}
