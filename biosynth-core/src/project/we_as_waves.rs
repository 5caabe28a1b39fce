//! We As Waves
//!
//! Installation program. The LED follows the skin conductance response.

use super::Project;
use crate::traits::SensorFrame;

const SECTIONS: [&str; 5] = ["Arrival", "Swell", "Crest", "Undertow", "Dissolve"];

pub struct WeAsWaves {
    current_section: u8,
    led_level: f32,
}

impl WeAsWaves {
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

impl Default for WeAsWaves {
    fn default() -> Self {
        Self::new()
    }
}

impl Project for WeAsWaves {
    fn name(&self) -> &'static str {
        "We As Waves"
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
        self.led_level = frame.scr.clamp(0.0, 1.0);
    }

    fn change_section(&mut self, section: u8) {
        self.current_section = section % self.section_count();
    }

    fn led_level(&self) -> f32 {
        self.led_level
    }
}
