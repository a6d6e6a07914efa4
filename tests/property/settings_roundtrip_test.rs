//! Property-based tests for settings serialization round-trip.
//!
//! Any settings value survives JSON serialization, and a value written by
//! one SettingsEngine is read back unchanged by another.

use proptest::prelude::*;
use tempfile::TempDir;
use webtabs::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webtabs::types::gesture::MouseButton;
use webtabs::types::settings::{
    BrowserSettings, GestureSettings, ProfileSettings, TabSettings, WebUrlSettings,
};

// --- Arbitrary strategies for settings types ---

fn arb_tab_settings() -> impl Strategy<Value = TabSettings> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        1usize..100,
    )
        .prop_map(
            |(
                hide_tabs_with_one_tab,
                dont_quit_with_one_tab,
                closed_instead_opened_tabs,
                new_tab_after_active,
                closed_tabs_capacity,
            )| TabSettings {
                hide_tabs_with_one_tab,
                dont_quit_with_one_tab,
                closed_instead_opened_tabs,
                new_tab_after_active,
                closed_tabs_capacity,
            },
        )
}

fn arb_web_settings() -> impl Strategy<Value = WebUrlSettings> {
    ("\\PC{0,40}", "\\PC{0,40}").prop_map(|(new_tab_url, homepage)| WebUrlSettings {
        new_tab_url,
        homepage,
    })
}

fn arb_gesture_settings() -> impl Strategy<Value = GestureSettings> {
    (
        any::<bool>(),
        prop_oneof![
            Just(MouseButton::Left),
            Just(MouseButton::Middle),
            Just(MouseButton::Right)
        ],
        0u32..200,
    )
        .prop_map(|(enabled, trigger_button, min_movement)| GestureSettings {
            enabled,
            trigger_button,
            min_movement,
        })
}

fn arb_settings() -> impl Strategy<Value = BrowserSettings> {
    (
        arb_tab_settings(),
        arb_web_settings(),
        arb_gesture_settings(),
        "[a-z][a-z0-9_-]{0,15}",
    )
        .prop_map(|(tabs, web, gestures, name)| BrowserSettings {
            tabs,
            web,
            gestures,
            profile: ProfileSettings { name },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let decoded: BrowserSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, settings);
    }

    #[test]
    fn settings_engine_roundtrip(settings in arb_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        let loaded = engine.load().unwrap();
        prop_assert_eq!(&loaded, &settings);

        // Saving what was loaded reproduces the same settings.
        engine.save().unwrap();
        let mut second = SettingsEngine::new(Some(path));
        prop_assert_eq!(second.load().unwrap(), settings);
    }

    #[test]
    fn set_value_changes_only_the_named_field(
        settings in arb_settings(),
        min_movement in 0u32..500,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let mut engine = SettingsEngine::new(Some(path));
        engine.load().unwrap();
        engine
            .set_value("gestures.min_movement", serde_json::json!(min_movement))
            .unwrap();

        let mut expected = settings;
        expected.gestures.min_movement = min_movement;
        prop_assert_eq!(engine.get_settings(), &expected);
    }
}
