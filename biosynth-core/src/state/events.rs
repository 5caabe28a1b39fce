//! Events that trigger navigation state transitions

/// Events that can trigger navigation state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// The opening banner has been on screen long enough
    OpeningDone,

    // Section navigation events
    /// The encoder position diverged from the committed section
    SectionProposed,
    /// Encoder button pressed while a proposal is pending
    ConfirmPressed,
    /// The confirmation window elapsed with no press
    ConfirmTimedOut,
    /// Foot pedal advanced the section (pedal mode; commits immediately)
    PedalAdvance,

    // Logging chain events
    /// Encoder button pressed in the logging chain (arm, start, stop)
    LogButton,
    /// The post-logging trailing window elapsed
    TrailingDone,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::SectionProposed
                | Event::ConfirmPressed
                | Event::PedalAdvance
                | Event::LogButton
        )
    }

    /// Check if this event comes from a timer elapsing
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::OpeningDone | Event::ConfirmTimedOut | Event::TrailingDone
        )
    }
}
