//! Closed Tabs Manager.
//!
//! Keeps a bounded, most-recent-first list of closed tabs for "undo close tab".

use std::collections::VecDeque;

use tracing::debug;

use crate::types::closed_tab::ClosedTabEntry;

/// Default number of closed tabs remembered.
pub const DEFAULT_CAPACITY: usize = 10;

/// Trait defining closed-tab history operations.
pub trait ClosedTabsManagerTrait {
    fn save_tab(&mut self, entry: ClosedTabEntry);
    fn take_first(&mut self) -> Option<ClosedTabEntry>;
    fn take_at(&mut self, index: usize) -> Option<ClosedTabEntry>;
    fn all(&self) -> Vec<&ClosedTabEntry>;
    fn is_available(&self) -> bool;
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
}

/// In-memory closed-tab history.
#[derive(Debug)]
pub struct ClosedTabsManager {
    tabs: VecDeque<ClosedTabEntry>,
    capacity: usize,
}

impl ClosedTabsManager {
    /// Creates a manager remembering at most `capacity` tabs (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            tabs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Changes the capacity, evicting the oldest entries if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.tabs.truncate(self.capacity);
    }
}

impl Default for ClosedTabsManager {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ClosedTabsManagerTrait for ClosedTabsManager {
    /// Records a closed tab at the front. Blank tabs with no history are skipped.
    fn save_tab(&mut self, entry: ClosedTabEntry) {
        if entry.url.is_empty() && entry.history.is_empty() {
            return;
        }
        debug!(url = %entry.url, position = entry.position, "recording closed tab");
        self.tabs.push_front(entry);
        self.tabs.truncate(self.capacity);
    }

    /// Removes and returns the most recently closed tab.
    fn take_first(&mut self) -> Option<ClosedTabEntry> {
        self.tabs.pop_front()
    }

    fn take_at(&mut self, index: usize) -> Option<ClosedTabEntry> {
        self.tabs.remove(index)
    }

    fn all(&self) -> Vec<&ClosedTabEntry> {
        self.tabs.iter().collect()
    }

    fn is_available(&self) -> bool {
        !self.tabs.is_empty()
    }

    fn clear(&mut self) {
        self.tabs.clear();
    }

    fn len(&self) -> usize {
        self.tabs.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
