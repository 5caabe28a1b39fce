//! Session logging lifecycle
//!
//! Wraps a [`SessionStore`] with the create → start → stop lifecycle and
//! the sample counter. The logger itself does not guard against a
//! double-stop; the navigator's trailing-timer check does, so the stop
//! press cannot fire twice per armed session.

use crate::traits::{SampleRecord, SessionStore, StorageError};

/// Fixed session file name. One file per create; no collision avoidance,
/// so repeated sessions on the same card overwrite unless the store
/// versions names itself.
pub const SESSION_FILE_NAME: &str = "session_recording.txt";

/// Logging lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogState {
    /// No session file
    Idle,
    /// File created, not yet recording
    FileCreated,
    /// Recording samples
    Logging,
    /// Session closed; counters retained for reporting
    Stopped,
}

/// Recording-session lifecycle wrapper around a storage backend.
pub struct SessionLogger<S: SessionStore> {
    store: S,
    state: LogState,
    num_samples: u32,
}

impl<S: SessionStore> SessionLogger<S> {
    /// Wrap a storage backend. The backend is not touched until
    /// [`initialize`](Self::initialize).
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: LogState::Idle,
            num_samples: 0,
        }
    }

    /// Bring up the storage medium.
    ///
    /// An error here is fatal when logging is enabled: the instrument
    /// must not run with broken recording, so the embedder halts.
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        self.store.initialize()
    }

    /// Create the session file. Valid from `Idle` or `Stopped`; ignored
    /// otherwise.
    pub fn create_file(&mut self) -> Result<(), StorageError> {
        match self.state {
            LogState::Idle | LogState::Stopped => {
                self.store.create(SESSION_FILE_NAME)?;
                self.state = LogState::FileCreated;
                self.num_samples = 0;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Start recording. Valid from `FileCreated`; ignored otherwise.
    pub fn start_logging(&mut self) {
        if self.state == LogState::FileCreated {
            self.state = LogState::Logging;
        }
    }

    /// Append one sample. A no-op unless currently logging; the counter
    /// increments only on a successful append.
    pub fn log_data(&mut self, record: &SampleRecord) -> Result<(), StorageError> {
        if self.state != LogState::Logging {
            return Ok(());
        }
        self.store.append(record)?;
        self.num_samples += 1;
        Ok(())
    }

    /// Stop recording and close the file. Valid from `Logging`; ignored
    /// otherwise.
    pub fn stop_logging(&mut self) -> Result<(), StorageError> {
        if self.state == LogState::Logging {
            self.store.close()?;
            self.state = LogState::Stopped;
        }
        Ok(())
    }

    /// Whether the logger is currently recording.
    pub fn is_logging(&self) -> bool {
        self.state == LogState::Logging
    }

    /// Lifecycle state.
    pub fn state(&self) -> LogState {
        self.state
    }

    /// Samples recorded in the current or most recent session.
    pub fn num_samples(&self) -> u32 {
        self.num_samples
    }

    /// Borrow the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory store counting operations.
    #[derive(Default)]
    struct MemStore {
        creates: u32,
        appends: u32,
        closes: u32,
        fail_init: bool,
    }

    impl SessionStore for MemStore {
        fn initialize(&mut self) -> Result<(), StorageError> {
            if self.fail_init {
                return Err(StorageError::Unavailable);
            }
            Ok(())
        }

        fn create(&mut self, name: &str) -> Result<(), StorageError> {
            assert_eq!(name, SESSION_FILE_NAME);
            self.creates += 1;
            Ok(())
        }

        fn append(&mut self, _record: &SampleRecord) -> Result<(), StorageError> {
            self.appends += 1;
            Ok(())
        }

        fn close(&mut self) -> Result<(), StorageError> {
            self.closes += 1;
            Ok(())
        }
    }

    fn record() -> SampleRecord {
        SampleRecord {
            heart: 512,
            skin_conductance: 300,
            respiration: 700,
            pedal: None,
        }
    }

    #[test]
    fn test_lifecycle_order() {
        let mut logger = SessionLogger::new(MemStore::default());
        assert_eq!(logger.state(), LogState::Idle);

        logger.create_file().unwrap();
        assert_eq!(logger.state(), LogState::FileCreated);

        logger.start_logging();
        assert!(logger.is_logging());

        logger.log_data(&record()).unwrap();
        logger.log_data(&record()).unwrap();
        assert_eq!(logger.num_samples(), 2);

        logger.stop_logging().unwrap();
        assert_eq!(logger.state(), LogState::Stopped);
        // Counter retained for reporting
        assert_eq!(logger.num_samples(), 2);
    }

    #[test]
    fn test_log_before_start_is_noop() {
        let mut logger = SessionLogger::new(MemStore::default());
        logger.create_file().unwrap();

        logger.log_data(&record()).unwrap();
        assert_eq!(logger.num_samples(), 0);
        assert_eq!(logger.store.appends, 0);
    }

    #[test]
    fn test_log_after_stop_is_noop() {
        let mut logger = SessionLogger::new(MemStore::default());
        logger.create_file().unwrap();
        logger.start_logging();
        logger.log_data(&record()).unwrap();
        logger.stop_logging().unwrap();

        logger.log_data(&record()).unwrap();
        assert_eq!(logger.num_samples(), 1);
        assert_eq!(logger.store.appends, 1);
    }

    #[test]
    fn test_start_requires_file() {
        let mut logger = SessionLogger::new(MemStore::default());
        logger.start_logging();
        assert!(!logger.is_logging());
        logger.log_data(&record()).unwrap();
        assert_eq!(logger.num_samples(), 0);
    }

    #[test]
    fn test_double_stop_closes_once() {
        let mut logger = SessionLogger::new(MemStore::default());
        logger.create_file().unwrap();
        logger.start_logging();
        logger.stop_logging().unwrap();
        logger.stop_logging().unwrap();
        assert_eq!(logger.store.closes, 1);
    }

    #[test]
    fn test_new_session_resets_counter() {
        let mut logger = SessionLogger::new(MemStore::default());
        logger.create_file().unwrap();
        logger.start_logging();
        logger.log_data(&record()).unwrap();
        logger.stop_logging().unwrap();

        logger.create_file().unwrap();
        assert_eq!(logger.num_samples(), 0);
        assert_eq!(logger.store.creates, 2);
    }

    #[test]
    fn test_initialize_failure_is_surfaced() {
        let mut logger = SessionLogger::new(MemStore {
            fail_init: true,
            ..Default::default()
        });
        assert_eq!(logger.initialize(), Err(StorageError::Unavailable));
    }
}
