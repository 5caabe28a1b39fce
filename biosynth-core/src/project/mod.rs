//! Sonification projects
//!
//! A project is a selectable sonification program driving audio and LED
//! behavior across a fixed set of sections. Exactly one project is
//! active for the instrument's entire runtime; it is constructed once
//! from the boot-time selector result and never reassigned.
//!
//! The sonification DSP itself lives with the audio shield, outside this
//! crate; the core only needs the section map and the processed LED
//! level.

pub mod recorder;
pub mod song_of_seven;
pub mod we_as_waves;

pub use recorder::Recorder;
pub use song_of_seven::SongOfSeven;
pub use we_as_waves::WeAsWaves;

use crate::traits::SensorFrame;

/// Which project the boot-time selector chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProjectId {
    /// Default performance program
    SongOfSeven,
    /// Installation program
    WeAsWaves,
    /// Plain sensor recording, no performance mapping
    Recorder,
}

/// Capability set every project exposes to the core.
pub trait Project {
    /// Display name, shown on the boot announcement screen.
    fn name(&self) -> &'static str;

    /// Number of sections. Always at least 1.
    fn section_count(&self) -> u8;

    /// Display title of a section. `section` is in
    /// `[0, section_count())`.
    fn section_title(&self, section: u8) -> &'static str;

    /// One-time setup after selection, before the loop starts.
    fn setup(&mut self);

    /// Per-tick update with the latest sensor frame.
    fn update(&mut self, frame: &SensorFrame);

    /// Section-change hook, invoked exactly once per committed change.
    fn change_section(&mut self, section: u8);

    /// Processed level for the status LED, in `[0.0, 1.0]`.
    fn led_level(&self) -> f32;
}

/// The active project, owned by the instrument.
///
/// Enum dispatch keeps the crate `no_std` without an allocator.
pub enum ActiveProject {
    SongOfSeven(SongOfSeven),
    WeAsWaves(WeAsWaves),
    Recorder(Recorder),
}

impl ActiveProject {
    /// Construct the project the selector chose.
    pub fn new(id: ProjectId) -> Self {
        match id {
            ProjectId::SongOfSeven => Self::SongOfSeven(SongOfSeven::new()),
            ProjectId::WeAsWaves => Self::WeAsWaves(WeAsWaves::new()),
            ProjectId::Recorder => Self::Recorder(Recorder::new()),
        }
    }

    /// Identity of the active variant.
    pub fn id(&self) -> ProjectId {
        match self {
            Self::SongOfSeven(_) => ProjectId::SongOfSeven,
            Self::WeAsWaves(_) => ProjectId::WeAsWaves,
            Self::Recorder(_) => ProjectId::Recorder,
        }
    }
}

impl Project for ActiveProject {
    fn name(&self) -> &'static str {
        match self {
            Self::SongOfSeven(p) => p.name(),
            Self::WeAsWaves(p) => p.name(),
            Self::Recorder(p) => p.name(),
        }
    }

    fn section_count(&self) -> u8 {
        match self {
            Self::SongOfSeven(p) => p.section_count(),
            Self::WeAsWaves(p) => p.section_count(),
            Self::Recorder(p) => p.section_count(),
        }
    }

    fn section_title(&self, section: u8) -> &'static str {
        match self {
            Self::SongOfSeven(p) => p.section_title(section),
            Self::WeAsWaves(p) => p.section_title(section),
            Self::Recorder(p) => p.section_title(section),
        }
    }

    fn setup(&mut self) {
        match self {
            Self::SongOfSeven(p) => p.setup(),
            Self::WeAsWaves(p) => p.setup(),
            Self::Recorder(p) => p.setup(),
        }
    }

    fn update(&mut self, frame: &SensorFrame) {
        match self {
            Self::SongOfSeven(p) => p.update(frame),
            Self::WeAsWaves(p) => p.update(frame),
            Self::Recorder(p) => p.update(frame),
        }
    }

    fn change_section(&mut self, section: u8) {
        match self {
            Self::SongOfSeven(p) => p.change_section(section),
            Self::WeAsWaves(p) => p.change_section(section),
            Self::Recorder(p) => p.change_section(section),
        }
    }

    fn led_level(&self) -> f32 {
        match self {
            Self::SongOfSeven(p) => p.led_level(),
            Self::WeAsWaves(p) => p.led_level(),
            Self::Recorder(p) => p.led_level(),
        }
    }
}
