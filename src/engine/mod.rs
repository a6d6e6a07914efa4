//! Browser-engine view seam.
//!
//! The tab widget never renders or loads pages itself; it drives a
//! [`BrowserView`] and reads back URL, title and history. The
//! [`headless::HeadlessView`] implementation keeps that state in memory and is
//! used by the demo binary and the tests.

pub mod headless;

pub use headless::HeadlessView;

use crate::types::navigation::NavigationHistory;

/// Navigation view embedded in a tab.
pub trait BrowserView: Default {
    fn load(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn stop(&mut self);
    fn reload(&mut self);
    fn url(&self) -> &str;
    fn title(&self) -> &str;
    fn is_loading(&self) -> bool;
    fn history(&self) -> &NavigationHistory;
    /// Replaces the back/forward list, as when a closed tab is reopened.
    fn restore_history(&mut self, history: NavigationHistory);
}
