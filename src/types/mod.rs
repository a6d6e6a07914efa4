// Shared type definitions
// Each submodule defines types used across the tab widget, persistence and gestures.

pub mod closed_tab;
pub mod errors;
pub mod gesture;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod tab;
