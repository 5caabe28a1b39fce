//! Mock collaborators for host-side instrument tests.

// Each integration test compiles its own copy and uses a subset
#![allow(dead_code)]

use std::cell::Cell;

use biosynth_core::time::Clock;
use biosynth_core::traits::{
    AudioShield, Biosensors, Buttons, Encoder, Lcd, SampleRecord, SensorFrame, SessionStore,
    StatusLed, StorageError, TelemetrySink, VolumePot,
};

/// Clock advancing a fixed step on every read, so the boot-time busy
/// waits terminate.
pub struct SteppingClock {
    now: Cell<u32>,
    step: u32,
}

impl SteppingClock {
    pub fn new(step: u32) -> Self {
        Self {
            now: Cell::new(0),
            step,
        }
    }

    /// Time of the next read.
    pub fn peek(&self) -> u32 {
        self.now.get()
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step));
        now
    }
}

/// Captures every screen update.
#[derive(Default)]
pub struct MockLcd {
    pub line1: String,
    pub line2: String,
    pub updates: u32,
}

impl Lcd for MockLcd {
    fn show(&mut self, line1: &str, line2: &str) {
        self.line1 = line1.to_owned();
        self.line2 = line2.to_owned();
        self.updates += 1;
    }

    fn clear(&mut self) {
        self.line1.clear();
        self.line2.clear();
    }
}

#[derive(Default)]
pub struct MockLed {
    pub level: f32,
    pub refreshes: u32,
}

impl StatusLed for MockLed {
    fn set_level(&mut self, level: f32) {
        self.level = level;
        self.refreshes += 1;
    }
}

/// Encoder with an externally scripted raw position.
#[derive(Default)]
pub struct ScriptedEncoder {
    pub raw: i32,
}

impl Encoder for ScriptedEncoder {
    fn update(&mut self, wrap: u8) -> u8 {
        self.raw.rem_euclid(i32::from(wrap)) as u8
    }

    fn set_position(&mut self, value: u8) {
        self.raw = i32::from(value);
    }
}

/// Buttons with one-shot scripted press edges.
#[derive(Default)]
pub struct ScriptedButtons {
    pub encoder_press: bool,
    pub pedal_press: bool,
    pub pedal_down: bool,
}

impl Buttons for ScriptedButtons {
    fn encoder_pressed(&mut self) -> bool {
        core::mem::take(&mut self.encoder_press)
    }

    fn pedal_pressed(&mut self) -> bool {
        core::mem::take(&mut self.pedal_press)
    }

    fn pedal_level(&self) -> bool {
        self.pedal_down
    }
}

/// Sensor bank returning a fixed frame.
#[derive(Default)]
pub struct MockSensors {
    pub frame: SensorFrame,
    pub polls: u32,
}

impl Biosensors for MockSensors {
    fn sample(&mut self) -> SensorFrame {
        self.polls += 1;
        self.frame
    }
}

#[derive(Default)]
pub struct MockPot {
    pub raw: u16,
}

impl VolumePot for MockPot {
    fn read(&mut self) -> u16 {
        self.raw
    }
}

#[derive(Default)]
pub struct MockAudio {
    pub gain: f32,
    pub muted: bool,
}

impl AudioShield for MockAudio {
    fn set_volume(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

#[derive(Default)]
pub struct MockSink {
    pub lines: Vec<String>,
    pub debugs: Vec<String>,
}

impl TelemetrySink for MockSink {
    fn send_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    fn debug(&mut self, message: &str) {
        self.debugs.push(message.to_owned());
    }
}

/// In-memory session store.
#[derive(Default)]
pub struct MemStore {
    pub initialized: bool,
    pub creates: u32,
    pub closes: u32,
    pub records: Vec<SampleRecord>,
    pub fail_init: bool,
}

impl SessionStore for MemStore {
    fn initialize(&mut self) -> Result<(), StorageError> {
        if self.fail_init {
            return Err(StorageError::Unavailable);
        }
        self.initialized = true;
        Ok(())
    }

    fn create(&mut self, _name: &str) -> Result<(), StorageError> {
        self.creates += 1;
        self.records.clear();
        Ok(())
    }

    fn append(&mut self, record: &SampleRecord) -> Result<(), StorageError> {
        self.records.push(*record);
        Ok(())
    }

    fn close(&mut self) -> Result<(), StorageError> {
        self.closes += 1;
        Ok(())
    }
}

pub type MockIo = biosynth_core::instrument::Io<
    MockLcd,
    MockLed,
    ScriptedEncoder,
    ScriptedButtons,
    MockSensors,
    MockPot,
    MockAudio,
    MockSink,
>;

/// Io bundle with every mock at its default.
pub fn mock_io() -> MockIo {
    biosynth_core::instrument::Io {
        lcd: MockLcd::default(),
        led: MockLed::default(),
        encoder: ScriptedEncoder::default(),
        buttons: ScriptedButtons::default(),
        sensors: MockSensors::default(),
        volume: MockPot::default(),
        audio: MockAudio::default(),
        telemetry: MockSink::default(),
    }
}
