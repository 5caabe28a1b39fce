//! Navigation state machine
//!
//! The pure state/event transition table lives here; the navigator owns
//! the timers and display side effects around it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
