use thiserror::Error;

// === TabError ===

/// Errors related to tab container operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// The provided tab index is out of bounds.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
    /// The closed-tab list has no entry to restore.
    #[error("No closed tab available")]
    NothingToRestore,
}

// === CodecError ===

/// Errors produced while decoding persisted tab state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The input ended before a complete value could be read.
    #[error("Truncated data: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    /// A string field did not contain valid UTF-8.
    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,
    /// The history blob references an item that does not exist.
    #[error("History index {index} out of range for {count} items")]
    HistoryIndex { index: u32, count: u32 },
}

// === SessionError ===

/// Errors related to pinned-tab and session persistence.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing a profile file failed.
    #[error("Session I/O error: {0}")]
    IoError(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system error occurred.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Serialization or deserialization failed.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The settings key does not exist.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value is not valid for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === GestureError ===

/// Errors related to gesture pattern registration.
#[derive(Debug, Error)]
pub enum GestureError {
    /// A pattern must contain at least one direction.
    #[error("Gesture pattern is empty")]
    EmptyPattern,
    /// The direction sequence is already mapped to an action.
    #[error("Gesture pattern already registered: {0}")]
    DuplicatePattern(String),
}
