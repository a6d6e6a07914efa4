//! Persistence layer.
//!
//! Provides the length-prefixed codec for session snapshots and navigation
//! history, and access to the profile directory the snapshots live in.
//!
//! # Usage
//!
//! ```no_run
//! use webtabs::storage::{codec, ProfileDir};
//! use webtabs::types::session::{SessionKind, SessionRecord};
//!
//! let profile = ProfileDir::open("/tmp/webtabs-profile").expect("failed to open profile");
//! let data = codec::encode_session(&SessionRecord::default(), SessionKind::Full);
//! profile.write(SessionKind::Full.file_name(), &data).expect("failed to write");
//! ```

pub mod codec;
pub mod profile;

pub use profile::ProfileDir;
