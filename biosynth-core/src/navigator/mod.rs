//! Section navigation
//!
//! The navigator mediates between the encoder and the committed section:
//! encoder movement proposes a change, the encoder button confirms it
//! within the confirmation window, and a timeout reverts it. In pedal
//! mode the foot pedal advances one section and commits immediately.
//! The same button drives the three-press logging chain when the
//! navigator is outside a proposal episode.
//!
//! Pure state transitions live in [`crate::state`]; this module owns the
//! timers, the gating conditions, and the display writes. Every
//! message-producing transition writes exactly two fixed-width lines.

use core::fmt::Write;

use heapless::String;

use crate::config::{Config, LCD_COLS};
use crate::project::Project;
use crate::session::SessionLogger;
use crate::state::{Event, State};
use crate::time::Timer;
use crate::traits::{Lcd, SessionStore, StorageError, TelemetrySink};

/// How long the "Logging Stopped" message stays up before the committed
/// section returns.
pub const TRAILING_DISPLAY_MS: u32 = 2000;

type Line = String<LCD_COLS>;

/// The section-navigation state machine and its timers.
///
/// Only the navigator writes `current_section` and `proposed_section`;
/// single-threaded execution makes that the whole ownership discipline.
pub struct SectionNavigator {
    state: State,
    /// Committed section; changes only on confirm or pedal advance.
    current_section: u8,
    /// Live encoder reading, already wrapped to the section count.
    proposed_section: u8,
    confirm: Timer,
    trailing: Timer,
    opening: Timer,
    banner_shown: bool,
}

impl SectionNavigator {
    pub const fn new() -> Self {
        Self {
            state: State::Boot,
            current_section: 0,
            proposed_section: 0,
            confirm: Timer::new(),
            trailing: Timer::new(),
            opening: Timer::new(),
            banner_shown: false,
        }
    }

    /// Current navigation state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Committed section index.
    pub fn current_section(&self) -> u8 {
        self.current_section
    }

    /// Proposed section index (live encoder reading).
    pub fn proposed_section(&self) -> u8 {
        self.proposed_section
    }

    /// Record the latest encoder reading.
    pub fn observe_encoder(&mut self, value: u8) {
        self.proposed_section = value;
    }

    /// Drive the opening banner. Shows "Hello!" once, then replaces it
    /// with the committed section after the configured display duration.
    pub fn banner_tick<L: Lcd, P: Project>(
        &mut self,
        now_ms: u32,
        lcd: &mut L,
        project: &P,
        config: &Config,
    ) {
        if !self.banner_shown {
            let mut line2 = Line::new();
            let _ = write!(line2, "I am board #{}", config.board_id as u16 + 1);
            lcd.show("Hello!", &line2);
            self.opening.start(now_ms);
            self.banner_shown = true;
        } else if self.state == State::Boot
            && self.opening.has_elapsed(now_ms, config.opening_message_ms)
        {
            self.opening.stop();
            self.transition(Event::OpeningDone);
            self.show_current_section(lcd, project, config);
        }
    }

    /// Evaluate the encoder proposal. Runs every UI tick in
    /// encoder-confirm mode.
    ///
    /// Re-entering while a proposal is pending re-displays the proposed
    /// title but arms the confirmation timer only once per divergence
    /// episode; an in-flight window is never restarted.
    pub fn proposal_tick<L: Lcd, P: Project>(&mut self, now_ms: u32, lcd: &mut L, project: &P) {
        if !self.state.accepts_proposals() || self.proposed_section == self.current_section {
            return;
        }

        let mut line1 = Line::new();
        let _ = line1.push_str(project.section_title(self.proposed_section));
        lcd.show(&line1, "   Confirm ?");
        self.transition(Event::SectionProposed);

        if !self.confirm.is_running() {
            self.confirm.start(now_ms);
        }
    }

    /// Commit a pending proposal on an encoder button press. Ignored
    /// unless a proposal is pending.
    pub fn confirm_press<L: Lcd, P: Project, T: TelemetrySink>(
        &mut self,
        lcd: &mut L,
        project: &mut P,
        sink: &mut T,
        config: &Config,
    ) {
        if self.state != State::ChangeSection {
            return;
        }

        sink.debug("Section change confirmed");
        self.current_section = self.proposed_section;
        project.change_section(self.current_section);
        self.confirm.stop();
        self.transition(Event::ConfirmPressed);
        self.show_current_section(lcd, project, config);
    }

    /// Revert a pending proposal whose confirmation window elapsed.
    ///
    /// Returns the committed section when the revert fires so the caller
    /// can force the encoder's logical position back onto it; the two
    /// copies re-converge and the episode ends. Mutually exclusive with
    /// [`confirm_press`](Self::confirm_press): whichever fires first
    /// stops the timer, and a press after the revert finds the state
    /// already back in `CurrentSection`.
    pub fn timeout_tick<L: Lcd, P: Project>(
        &mut self,
        now_ms: u32,
        lcd: &mut L,
        project: &P,
        config: &Config,
    ) -> Option<u8> {
        if self.state != State::ChangeSection
            || !self.confirm.has_elapsed(now_ms, config.confirmation_delay_ms)
        {
            return None;
        }

        self.proposed_section = self.current_section;
        self.confirm.stop();
        self.transition(Event::ConfirmTimedOut);
        self.show_current_section(lcd, project, config);
        Some(self.current_section)
    }

    /// Advance one section on a pedal press (pedal mode). Commits
    /// immediately, no confirmation window. Ignored outside the steady
    /// section display.
    pub fn pedal_advance<L: Lcd, P: Project, T: TelemetrySink>(
        &mut self,
        lcd: &mut L,
        project: &mut P,
        sink: &mut T,
        config: &Config,
    ) {
        if self.state != State::CurrentSection {
            return;
        }

        self.current_section = (self.current_section + 1) % project.section_count();
        self.proposed_section = self.current_section;
        project.change_section(self.current_section);
        self.transition(Event::PedalAdvance);
        self.show_current_section(lcd, project, config);
        sink.debug("Foot pedal pressed, advanced section");
    }

    /// Drive the three-press logging chain: create the session file,
    /// start recording, stop recording. A fourth press while the
    /// trailing "stopped" message is up is ignored; the trailing timer
    /// is the double-stop guard.
    pub fn logging_tick<L: Lcd, P: Project, S: SessionStore, T: TelemetrySink>(
        &mut self,
        now_ms: u32,
        pressed: bool,
        logger: &mut SessionLogger<S>,
        lcd: &mut L,
        project: &P,
        sink: &mut T,
        config: &Config,
    ) -> Result<(), StorageError> {
        match self.state {
            State::CurrentSection => {
                if pressed && !logger.is_logging() {
                    sink.debug("Record to storage?");
                    logger.create_file()?;
                    lcd.show("Record on SD?", "");
                    self.transition(Event::LogButton);
                }
            }
            State::ArmLogging => {
                if pressed && !logger.is_logging() {
                    sink.debug("Starting logging");
                    logger.start_logging();
                    lcd.show("  Now Logging", "");
                    self.transition(Event::LogButton);
                }
            }
            State::Logging => {
                if pressed && logger.is_logging() && !self.trailing.is_running() {
                    sink.debug("Ending session");
                    logger.stop_logging()?;

                    let mut message = String::<32>::new();
                    let _ = write!(message, "Samples recorded: {}", logger.num_samples());
                    sink.debug(&message);

                    lcd.show("Logging Stopped", "");
                    self.trailing.start(now_ms);
                }

                if self.trailing.is_running()
                    && self.trailing.has_elapsed(now_ms, TRAILING_DISPLAY_MS)
                {
                    self.trailing.stop();
                    self.transition(Event::TrailingDone);
                    self.show_current_section(lcd, project, config);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Display the committed section's title over the board banner.
    fn show_current_section<L: Lcd, P: Project>(
        &mut self,
        lcd: &mut L,
        project: &P,
        config: &Config,
    ) {
        let mut line1 = Line::new();
        let _ = line1.push_str(project.section_title(self.current_section));
        let mut line2 = Line::new();
        let _ = write!(line2, "   BIOSYNTH {}", config.board_id as u16 + 1);
        lcd.show(&line1, &line2);
    }

    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}
