use super::BrowserView;
use crate::types::navigation::NavigationHistory;

/// In-memory view: navigations complete immediately and the page title
/// is the URL until [`HeadlessView::finish_load`] reports a real one.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    url: String,
    title: String,
    loading: bool,
    history: NavigationHistory,
    reload_count: u32,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the engine finishing a load with the given page title.
    pub fn finish_load(&mut self, title: &str) {
        self.loading = false;
        self.title = title.to_string();
        self.history.set_current_title(title);
    }

    /// Simulates a load that is still in flight.
    pub fn start_load(&mut self, url: &str) {
        self.load(url);
        self.loading = true;
    }

    pub fn reload_count(&self) -> u32 {
        self.reload_count
    }

    fn show_current(&mut self) {
        let (url, title) = match self.history.current_item() {
            Some(item) => (item.url.clone(), item.title.clone()),
            None => (String::new(), String::new()),
        };
        self.url = url;
        self.title = title;
        self.loading = false;
    }
}

impl BrowserView for HeadlessView {
    fn load(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.history.push(url, url);
        self.url = url.to_string();
        self.title = url.to_string();
        self.loading = false;
    }

    fn back(&mut self) {
        if self.history.back().is_some() {
            self.show_current();
        }
    }

    fn forward(&mut self) {
        if self.history.forward().is_some() {
            self.show_current();
        }
    }

    fn stop(&mut self) {
        self.loading = false;
    }

    fn reload(&mut self) {
        self.reload_count += 1;
        self.loading = false;
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn history(&self) -> &NavigationHistory {
        &self.history
    }

    fn restore_history(&mut self, history: NavigationHistory) {
        self.history = history;
        self.show_current();
    }
}
