use serde::{Deserialize, Serialize};

/// A single entry in a tab's back/forward list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItem {
    pub url: String,
    pub title: String,
}

/// Back/forward list of one navigation view.
///
/// `current` always indexes into `items` when the list is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationHistory {
    items: Vec<HistoryItem>,
    current: usize,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from raw parts, clamping `current` into range.
    pub fn from_parts(items: Vec<HistoryItem>, current: usize) -> Self {
        let current = if items.is_empty() {
            0
        } else {
            current.min(items.len() - 1)
        };
        Self { items, current }
    }

    /// Records a new navigation, dropping any forward entries.
    pub fn push(&mut self, url: &str, title: &str) {
        if !self.items.is_empty() {
            self.items.truncate(self.current + 1);
        }
        self.items.push(HistoryItem {
            url: url.to_string(),
            title: title.to_string(),
        });
        self.current = self.items.len() - 1;
    }

    pub fn back(&mut self) -> Option<&HistoryItem> {
        if !self.can_go_back() {
            return None;
        }
        self.current -= 1;
        self.items.get(self.current)
    }

    pub fn forward(&mut self) -> Option<&HistoryItem> {
        if !self.can_go_forward() {
            return None;
        }
        self.current += 1;
        self.items.get(self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.items.is_empty() && self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.items.len()
    }

    pub fn current_item(&self) -> Option<&HistoryItem> {
        self.items.get(self.current)
    }

    /// Updates the title of the current entry once the page reports it.
    pub fn set_current_title(&mut self, title: &str) {
        if let Some(item) = self.items.get_mut(self.current) {
            item.title = title.to_string();
        }
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.current = 0;
    }
}
