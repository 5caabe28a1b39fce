//! Navigation state machine definition
//!
//! Which screen is showing and which inputs are live is a function of
//! the current state and an event. The transition table is pure; gating
//! conditions (timer running, logger state, advance mode) are checked by
//! the navigator before it emits an event.

use super::events::Event;

/// Navigation states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Opening banner showing; entered once at startup
    Boot,
    /// Steady display of the committed section
    CurrentSection,
    /// A section proposal is pending confirmation
    ChangeSection,
    /// Session file created, waiting for the start press
    ArmLogging,
    /// Recording; also covers the trailing "stopped" display
    Logging,
}

impl State {
    /// Check if this state accepts encoder section proposals
    pub fn accepts_proposals(&self) -> bool {
        matches!(self, State::CurrentSection | State::ChangeSection)
    }

    /// Check if this state is part of the logging chain
    pub fn in_logging_chain(&self) -> bool {
        matches!(self, State::ArmLogging | State::Logging)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic. Events that are not
    /// valid in the current state leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Boot transitions
            (Boot, OpeningDone) => CurrentSection,

            // Section navigation
            (CurrentSection, SectionProposed) => ChangeSection,
            (ChangeSection, SectionProposed) => ChangeSection,
            (ChangeSection, ConfirmPressed) => CurrentSection,
            (ChangeSection, ConfirmTimedOut) => CurrentSection,
            // Pedal advance commits in place, no confirmation window
            (CurrentSection, PedalAdvance) => CurrentSection,

            // Logging chain
            (CurrentSection, LogButton) => ArmLogging,
            (ArmLogging, LogButton) => Logging,
            // The stop press keeps Logging until the trailing window ends
            (Logging, LogButton) => Logging,
            (Logging, TrailingDone) => CurrentSection,

            // Default: stay in current state
            _ => self,
        }
    }
}
