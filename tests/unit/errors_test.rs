//! Unit tests for error type display messages.

use webtabs::types::errors::{CodecError, GestureError, SessionError, SettingsError, TabError};

#[test]
fn test_tab_error_messages() {
    assert_eq!(TabError::InvalidIndex(4).to_string(), "Invalid tab index: 4");
    assert_eq!(
        TabError::NothingToRestore.to_string(),
        "No closed tab available"
    );
}

#[test]
fn test_codec_error_messages() {
    let truncated = CodecError::Truncated {
        needed: 8,
        remaining: 3,
    };
    assert_eq!(
        truncated.to_string(),
        "Truncated data: needed 8 bytes, 3 remaining"
    );
    assert_eq!(
        CodecError::InvalidUtf8.to_string(),
        "Invalid UTF-8 in string field"
    );
    assert_eq!(
        CodecError::HistoryIndex { index: 5, count: 2 }.to_string(),
        "History index 5 out of range for 2 items"
    );
}

#[test]
fn test_session_error_messages() {
    assert_eq!(
        SessionError::IoError("disk full".to_string()).to_string(),
        "Session I/O error: disk full"
    );
}

#[test]
fn test_settings_error_messages() {
    assert_eq!(
        SettingsError::IoError("x".to_string()).to_string(),
        "Settings I/O error: x"
    );
    assert_eq!(
        SettingsError::SerializationError("x".to_string()).to_string(),
        "Settings serialization error: x"
    );
    assert_eq!(
        SettingsError::InvalidKey("x".to_string()).to_string(),
        "Invalid settings key: x"
    );
    assert_eq!(
        SettingsError::InvalidValue("x".to_string()).to_string(),
        "Invalid settings value: x"
    );
}

#[test]
fn test_gesture_error_messages() {
    assert_eq!(
        GestureError::EmptyPattern.to_string(),
        "Gesture pattern is empty"
    );
    assert_eq!(
        GestureError::DuplicatePattern("Down+Right".to_string()).to_string(),
        "Gesture pattern already registered: Down+Right"
    );
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&TabError::InvalidIndex(0));
    assert_error(&CodecError::InvalidUtf8);
    assert_error(&SessionError::IoError(String::new()));
    assert_error(&SettingsError::InvalidKey(String::new()));
    assert_error(&GestureError::EmptyPattern);
}
