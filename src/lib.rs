//! webtabs: tabbed browsing core and mouse gestures for a desktop web browser.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
