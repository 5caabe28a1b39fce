//! Audio shield trait

/// The audio shield. Synthesis happens inside the projects' own DSP,
/// outside this crate; the core only drives gain and the boot-time mute.
pub trait AudioShield {
    /// Set output gain in `[0.0, 1.0]`.
    fn set_volume(&mut self, gain: f32);

    /// Mute or unmute the output. Held muted during initialization.
    fn set_muted(&mut self, muted: bool);
}
