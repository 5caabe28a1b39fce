//! Instrument coordination loop
//!
//! [`Instrument`] is the central brain that:
//! - runs the boot sequence (project selection, announcement, storage
//!   bring-up)
//! - samples the biosensors on the configured period and forwards
//!   samples to the session logger and the telemetry sink
//! - tracks the volume potentiometer and drives the audio gain
//! - delegates encoder/pedal input to the section navigator and
//!   refreshes the banner, screen, and LED on the UI period
//!
//! Everything runs on one cooperative control flow: the embedder calls
//! [`tick`](Instrument::tick) from a tight loop with the current
//! timestamp. Within one tick, sampling and logging are evaluated before
//! navigation and display, and navigation before the LED refresh.

use core::fmt::Write;

use heapless::String;

use crate::config::{AdvanceMode, Config, UI_REFRESH_MS};
use crate::navigator::SectionNavigator;
use crate::project::{ActiveProject, Project, ProjectId};
use crate::selector::ProjectSelector;
use crate::session::SessionLogger;
use crate::state::State;
use crate::telemetry;
use crate::time::{Clock, Timer};
use crate::traits::{
    AudioShield, Biosensors, Buttons, Encoder, Lcd, SampleRecord, SensorFrame, SessionStore,
    StatusLed, StorageError, TelemetrySink, VolumePot,
};

/// Gain at full pot deflection.
const MAX_GAIN: f32 = 0.8;

/// The hardware collaborators, owned by the board crate and lent to the
/// core for the instrument's lifetime.
pub struct Io<L, D, E, B, S, V, A, T> {
    pub lcd: L,
    pub led: D,
    pub encoder: E,
    pub buttons: B,
    pub sensors: S,
    pub volume: V,
    pub audio: A,
    pub telemetry: T,
}

/// The instrument core: configuration, navigation, logging, and the
/// sampling/UI timers. One instance per instrument, constructed at
/// startup.
pub struct Instrument<F: SessionStore> {
    config: Config,
    project: ActiveProject,
    navigator: SectionNavigator,
    logger: SessionLogger<F>,
    sample_timer: Timer,
    ui_timer: Timer,
    last_frame: SensorFrame,
    /// Last raw pot reading; the gain is recomputed only when it
    /// changes.
    volume_raw: u16,
    gain: f32,
}

impl<F: SessionStore> Instrument<F> {
    /// Create an instrument. The project is provisional until
    /// [`initialize`](Self::initialize) runs the boot-time selector.
    pub fn new(config: Config, store: F) -> Self {
        Self {
            config,
            project: ActiveProject::new(ProjectId::SongOfSeven),
            navigator: SectionNavigator::new(),
            logger: SessionLogger::new(store),
            sample_timer: Timer::new(),
            ui_timer: Timer::new(),
            last_frame: SensorFrame::default(),
            volume_raw: u16::MAX,
            gain: 0.0,
        }
    }

    /// Boot sequence. Blocks for the selection window and the
    /// announcement; both waits happen once, before the steady-state
    /// loop.
    ///
    /// Fails only when logging is enabled and storage cannot be brought
    /// up; the instrument is unusable without working recording, so the
    /// embedder must treat the error as halting.
    #[allow(clippy::type_complexity)]
    pub fn initialize<C, L, D, E, B, S, V, A, T>(
        &mut self,
        clock: &C,
        io: &mut Io<L, D, E, B, S, V, A, T>,
    ) -> Result<(), StorageError>
    where
        C: Clock,
        L: Lcd,
        D: StatusLed,
        E: Encoder,
        B: Buttons,
        S: Biosensors,
        V: VolumePot,
        A: AudioShield,
        T: TelemetrySink,
    {
        io.telemetry.debug("Biosynth instrument");
        io.audio.set_muted(true);
        io.lcd.clear();

        // One-shot blocking selection window
        let selector = ProjectSelector::new(self.config.selection_window_ms);
        let id = selector.select(clock, &mut io.encoder);
        self.project = ActiveProject::new(id);

        let mut message = String::<48>::new();
        let _ = write!(message, "Project loaded: {}", self.project.name());
        io.telemetry.debug(&message);

        // Announce the selection, then hold it on screen briefly
        io.lcd.show("    Biosynth", self.project.name());
        let announced_at = clock.now_ms();
        while clock.now_ms().wrapping_sub(announced_at) < self.config.announce_ms {}

        if self.config.logging {
            self.logger.initialize()?;
        }

        self.project.setup();
        io.audio.set_muted(false);
        io.lcd.clear();

        let now_ms = clock.now_ms();
        self.sample_timer.start(now_ms);
        self.ui_timer.start(now_ms);
        Ok(())
    }

    /// One iteration of the steady-state loop.
    ///
    /// Call as fast as the embedder likes with a monotonic millisecond
    /// timestamp; the sampling and UI periods gate themselves.
    #[allow(clippy::type_complexity)]
    pub fn tick<L, D, E, B, S, V, A, T>(
        &mut self,
        now_ms: u32,
        io: &mut Io<L, D, E, B, S, V, A, T>,
    ) -> Result<(), StorageError>
    where
        L: Lcd,
        D: StatusLed,
        E: Encoder,
        B: Buttons,
        S: Biosensors,
        V: VolumePot,
        A: AudioShield,
        T: TelemetrySink,
    {
        // Sensor poll, session log, telemetry - before navigation, so a
        // section commit in the same tick always sees the sampling
        // decision made first
        if self
            .sample_timer
            .has_elapsed_restart(now_ms, self.config.sample_period_ms)
        {
            let frame = io.sensors.sample();
            self.last_frame = frame;

            if self.config.logging {
                let pedal = matches!(self.config.advance, AdvanceMode::FootPedal)
                    .then(|| io.buttons.pedal_level());
                self.logger.log_data(&SampleRecord {
                    heart: frame.heart_raw,
                    skin_conductance: frame.sc1_raw,
                    respiration: frame.resp_raw,
                    pedal,
                })?;
            }

            if self.config.telemetry {
                let line = telemetry::format_line(self.config.board_id, &frame);
                io.telemetry.send_line(&line);
            }
        }

        // Audio gain follows the pot every tick; recompute only when the
        // raw reading changed
        let raw = io.volume.read();
        if raw != self.volume_raw {
            self.volume_raw = raw;
            self.gain = (f32::from(raw) / 1023.0) * MAX_GAIN;
        }
        io.audio.set_volume(self.gain);

        self.project.update(&self.last_frame);

        // Input: encoder position wrapped to the section count, plus the
        // press edge latched once and shared by the logging chain and
        // the confirm path
        let proposed = io.encoder.update(self.project.section_count());
        self.navigator.observe_encoder(proposed);
        let pressed = io.buttons.encoder_pressed();

        if self.config.logging {
            self.navigator.logging_tick(
                now_ms,
                pressed,
                &mut self.logger,
                &mut io.lcd,
                &self.project,
                &mut io.telemetry,
                &self.config,
            )?;
        }

        match self.config.advance {
            AdvanceMode::EncoderConfirm => {
                if pressed {
                    self.navigator.confirm_press(
                        &mut io.lcd,
                        &mut self.project,
                        &mut io.telemetry,
                        &self.config,
                    );
                }
            }
            AdvanceMode::FootPedal => {
                if io.buttons.pedal_pressed() {
                    self.navigator.pedal_advance(
                        &mut io.lcd,
                        &mut self.project,
                        &mut io.telemetry,
                        &self.config,
                    );
                }
            }
        }

        // UI refresh: banner, proposal window, LED
        if self.ui_timer.has_elapsed_restart(now_ms, UI_REFRESH_MS) {
            self.navigator
                .banner_tick(now_ms, &mut io.lcd, &self.project, &self.config);

            if self.config.advance == AdvanceMode::EncoderConfirm {
                self.navigator
                    .proposal_tick(now_ms, &mut io.lcd, &self.project);
                if let Some(committed) =
                    self.navigator
                        .timeout_tick(now_ms, &mut io.lcd, &self.project, &self.config)
                {
                    io.encoder.set_position(committed);
                }
            }

            io.led.set_level(self.project.led_level());
        }

        Ok(())
    }

    /// Current navigation state.
    pub fn state(&self) -> State {
        self.navigator.state()
    }

    /// Committed section index.
    pub fn current_section(&self) -> u8 {
        self.navigator.current_section()
    }

    /// The active project.
    pub fn project(&self) -> &ActiveProject {
        &self.project
    }

    /// The session logger.
    pub fn logger(&self) -> &SessionLogger<F> {
        &self.logger
    }

    /// Board configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
