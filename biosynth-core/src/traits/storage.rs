//! Session storage trait
//!
//! The only collaborator whose failures the core models. Storage that is
//! unavailable at initialization is fatal when logging is enabled: the
//! instrument is unusable without working recording, so the embedder
//! halts rather than degrading silently.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum session file size in bytes (8 MiB). Stores preallocate or cap
/// at this size.
pub const MAX_SESSION_FILE_BYTES: u32 = 8 * 1024 * 1024;

/// Errors from the storage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The storage medium is missing or failed to initialize.
    Unavailable,
    /// The medium or session file is full.
    Full,
    /// A write or close failed.
    Io,
}

/// One logged sensor sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleRecord {
    /// Raw heart reading.
    pub heart: u16,
    /// Raw skin-conductance reading (first channel).
    pub skin_conductance: u16,
    /// Raw respiration reading.
    pub respiration: u16,
    /// Pedal level at sample time, recorded in pedal mode only.
    pub pedal: Option<bool>,
}

/// Append-style session recording backend.
///
/// One file per `create` call. The core passes a fixed file name and
/// performs no collision avoidance; a store may version names itself.
pub trait SessionStore {
    /// Bring up the storage medium.
    fn initialize(&mut self) -> Result<(), StorageError>;

    /// Create (or truncate) the session file.
    fn create(&mut self, name: &str) -> Result<(), StorageError>;

    /// Append one record to the open session file.
    fn append(&mut self, record: &SampleRecord) -> Result<(), StorageError>;

    /// Flush and close the open session file.
    fn close(&mut self) -> Result<(), StorageError>;
}
