use serde::{Deserialize, Serialize};

/// A tab that was closed and can be reopened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClosedTabEntry {
    pub url: String,
    pub title: String,
    /// Encoded navigation history (see `storage::codec`).
    pub history: Vec<u8>,
    /// Index the tab occupied when it was closed.
    pub position: usize,
}
