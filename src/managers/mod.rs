// State managers
// Managers handle stateful operations: the tab container, closed-tab history and session files.

pub mod closed_tabs_manager;
pub mod session_manager;
pub mod tab_widget;
