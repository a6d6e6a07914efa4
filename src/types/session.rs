use serde::{Deserialize, Serialize};

/// One tab as stored in a pinned or full session snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEntry {
    pub url: String,
    /// Encoded navigation history; empty when the tab had none.
    pub history: Vec<u8>,
}

/// Ordered tab snapshot written to the profile directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub entries: Vec<SessionEntry>,
    /// Index of the tab that was current. Only the full session carries it.
    pub active_index: Option<i32>,
}

impl SessionRecord {
    pub fn urls(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.url.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two on-disk snapshot variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Pinned,
    Full,
}

impl SessionKind {
    pub fn file_name(self) -> &'static str {
        match self {
            SessionKind::Pinned => "pinnedtabs.dat",
            SessionKind::Full => "session.dat",
        }
    }
}
