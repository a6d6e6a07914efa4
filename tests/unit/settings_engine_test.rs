//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, dot-notation updates, persistence and reset.

use serde_json::json;
use tempfile::TempDir;
use webtabs::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webtabs::types::errors::SettingsError;
use webtabs::types::gesture::MouseButton;
use webtabs::types::settings::BrowserSettings;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(dir.path().join("settings.json")))
}

/// Without a config file the built-in defaults apply.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, BrowserSettings::default());
    assert!(settings.tabs.new_tab_after_active);
    assert!(!settings.tabs.dont_quit_with_one_tab);
    assert_eq!(settings.tabs.closed_tabs_capacity, 10);
    assert_eq!(settings.web.new_tab_url, "about:speeddial");
    assert_eq!(settings.gestures.trigger_button, MouseButton::Middle);
    assert_eq!(settings.gestures.min_movement, 20);
}

/// A change made through `set_value` is visible to a fresh engine.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("tabs.dont_quit_with_one_tab", json!(true))
            .unwrap();
        engine
            .set_value("web.new_tab_url", json!("about:blank"))
            .unwrap();
        engine
            .set_value("gestures.trigger_button", json!("Right"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert!(loaded.tabs.dont_quit_with_one_tab);
    assert_eq!(loaded.web.new_tab_url, "about:blank");
    assert_eq!(loaded.gestures.trigger_button, MouseButton::Right);
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("tabs.does_not_exist", json!(true));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));

    let result = engine.set_value("", json!(true));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("tabs.new_tab_after_active", json!("nope"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));

    let result = engine.set_value("gestures.trigger_button", json!("Wheel"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));

    // Failed updates leave the settings untouched.
    assert_eq!(engine.get_settings(), &BrowserSettings::default());
}

/// `reset()` reverts all values and writes the defaults to disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("tabs.hide_tabs_with_one_tab", json!(true))
        .unwrap();
    engine.set_value("gestures.min_movement", json!(5)).unwrap();

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &BrowserSettings::default());

    let mut fresh = engine_in_temp(&dir);
    assert_eq!(fresh.load().unwrap(), BrowserSettings::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    let result = engine.load();
    assert!(matches!(result, Err(SettingsError::SerializationError(_))));
}

/// Files written before `profile` and `closed_tabs_capacity` existed still load.
#[test]
fn test_missing_optional_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    let content = json!({
        "tabs": {
            "hide_tabs_with_one_tab": true,
            "dont_quit_with_one_tab": false,
            "closed_instead_opened_tabs": false,
            "new_tab_after_active": false
        },
        "web": { "new_tab_url": "about:blank", "homepage": "https://home.example" },
        "gestures": { "enabled": false, "trigger_button": "Middle", "min_movement": 30 }
    });
    std::fs::write(dir.path().join("settings.json"), content.to_string()).unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert!(settings.tabs.hide_tabs_with_one_tab);
    assert_eq!(settings.tabs.closed_tabs_capacity, 10);
    assert_eq!(settings.profile.name, "default");
    assert!(!settings.gestures.enabled);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.json");
    let engine = SettingsEngine::new(Some(path.clone()));

    engine.save().unwrap();
    assert!(path.is_file());
    assert_eq!(engine.get_config_path(), path.as_path());
}
