//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic and
//! the board crates. The LCD, LED, audio shield, biosensor ADCs, encoder
//! and button debouncing, and SD card I/O are all external collaborators;
//! the core only ever talks to these interfaces.

pub mod audio;
pub mod display;
pub mod input;
pub mod sensors;
pub mod storage;
pub mod telemetry;

pub use audio::AudioShield;
pub use display::{Lcd, StatusLed};
pub use input::{Buttons, Encoder, VolumePot};
pub use sensors::{Biosensors, SensorFrame};
pub use storage::{SampleRecord, SessionStore, StorageError};
pub use telemetry::TelemetrySink;
