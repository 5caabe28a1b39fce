//! Board-agnostic core logic for the Biosynth instrument
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (LCD, LED, encoder, buttons, biosensors,
//!   audio shield, session storage, telemetry sink)
//! - Section navigation state machine
//! - Session logging lifecycle
//! - Boot-time project selection
//! - The sampling/UI coordination loop
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod instrument;
pub mod navigator;
pub mod project;
pub mod selector;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod time;
pub mod traits;
