//! Session Manager.
//!
//! Saves and restores the pinned-tab snapshot and the full session snapshot
//! as length-prefixed binary files in the profile directory. Missing, empty
//! or undecodable files mean "nothing to restore".

use tracing::{debug, info, warn};

use crate::storage::codec;
use crate::storage::ProfileDir;
use crate::types::errors::SessionError;
use crate::types::session::{SessionKind, SessionRecord};

/// Trait defining session persistence operations.
pub trait SessionManagerTrait {
    fn save(&self, kind: SessionKind, record: &SessionRecord) -> Result<(), SessionError>;
    fn restore(&self, kind: SessionKind) -> Option<SessionRecord>;
    fn has_session(&self, kind: SessionKind) -> bool;
    fn clear(&self, kind: SessionKind) -> Result<(), SessionError>;
}

/// Session manager backed by files in a [`ProfileDir`].
pub struct SessionManager {
    profile: ProfileDir,
}

impl SessionManager {
    pub fn new(profile: ProfileDir) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ProfileDir {
        &self.profile
    }

    /// Reads the raw bytes for `kind`, folding I/O failures into `None`.
    fn read_raw(&self, kind: SessionKind) -> Option<Vec<u8>> {
        match self.profile.read(kind.file_name()) {
            Ok(Some(data)) if !data.is_empty() => Some(data),
            Ok(_) => {
                debug!(file = kind.file_name(), "no stored tabs");
                None
            }
            Err(e) => {
                warn!(file = kind.file_name(), error = %e, "failed to read stored tabs");
                None
            }
        }
    }
}

impl SessionManagerTrait for SessionManager {
    /// Encodes and writes a snapshot, replacing the previous one.
    fn save(&self, kind: SessionKind, record: &SessionRecord) -> Result<(), SessionError> {
        let data = codec::encode_session(record, kind);
        self.profile
            .write(kind.file_name(), &data)
            .map_err(|e| SessionError::IoError(e.to_string()))?;
        info!(file = kind.file_name(), tabs = record.entries.len(), "saved tabs");
        Ok(())
    }

    /// Loads a snapshot; anything unreadable is treated as empty.
    fn restore(&self, kind: SessionKind) -> Option<SessionRecord> {
        let data = self.read_raw(kind)?;
        match codec::decode_session(&data, kind) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(file = kind.file_name(), error = %e, "ignoring malformed stored tabs");
                None
            }
        }
    }

    fn has_session(&self, kind: SessionKind) -> bool {
        self.read_raw(kind).is_some()
    }

    fn clear(&self, kind: SessionKind) -> Result<(), SessionError> {
        self.profile
            .remove(kind.file_name())
            .map_err(|e| SessionError::IoError(e.to_string()))
    }
}
