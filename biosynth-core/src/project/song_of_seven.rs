//! Song of Seven
//!
//! Seven-movement vocal performance program; the default selection at
//! boot. The LED follows the performer's normalized heart signal.

use super::Project;
use crate::traits::SensorFrame;

const SECTIONS: [&str; 7] = [
    "Opening",
    "Rising Breath",
    "First Heart",
    "Still Point",
    "Second Heart",
    "Falling Breath",
    "Closing",
];

pub struct SongOfSeven {
    current_section: u8,
    led_level: f32,
}

impl SongOfSeven {
    pub const fn new() -> Self {
        Self {
            current_section: 0,
            led_level: 0.0,
        }
    }

    /// Section the sonification is currently playing.
    pub fn current_section(&self) -> u8 {
        self.current_section
    }
}

impl Default for SongOfSeven {
    fn default() -> Self {
        Self::new()
    }
}

impl Project for SongOfSeven {
    fn name(&self) -> &'static str {
        "Song of Seven"
    }

    fn section_count(&self) -> u8 {
        SECTIONS.len() as u8
    }

    fn section_title(&self, section: u8) -> &'static str {
        SECTIONS[section as usize % SECTIONS.len()]
    }

    fn setup(&mut self) {
        self.current_section = 0;
        self.led_level = 0.0;
    }

    fn update(&mut self, frame: &SensorFrame) {
        self.led_level = frame.heart_norm.clamp(0.0, 1.0);
    }

    fn change_section(&mut self, section: u8) {
        self.current_section = section % self.section_count();
    }

    fn led_level(&self) -> f32 {
        self.led_level
    }
}
