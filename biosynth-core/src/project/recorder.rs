//! Recorder
//!
//! Plain sensor recording with no performance mapping: a single section
//! and a dark LED. Selected at boot when the encoder reads 1 during the
//! selection window.

use super::Project;
use crate::traits::SensorFrame;

pub struct Recorder {
    current_section: u8,
}

impl Recorder {
    pub const fn new() -> Self {
        Self { current_section: 0 }
    }

    /// Section the recorder is in; always 0.
    pub fn current_section(&self) -> u8 {
        self.current_section
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Project for Recorder {
    fn name(&self) -> &'static str {
        "Recorder"
    }

    fn section_count(&self) -> u8 {
        1
    }

    fn section_title(&self, _section: u8) -> &'static str {
        "Recording"
    }

    fn setup(&mut self) {
        self.current_section = 0;
    }

    fn update(&mut self, _frame: &SensorFrame) {}

    fn change_section(&mut self, section: u8) {
        self.current_section = section % self.section_count();
    }

    fn led_level(&self) -> f32 {
        0.0
    }
}
