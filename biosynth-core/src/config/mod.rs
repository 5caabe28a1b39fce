//! Configuration types
//!
//! Board-level, runtime configuration for one instrument. The original
//! hardware builds selected feature variants at compile time; here they
//! are explicit fields checked at runtime.

pub mod types;

pub use types::*;
