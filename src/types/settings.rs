use serde::{Deserialize, Serialize};

use super::gesture::MouseButton;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub tabs: TabSettings,
    pub web: WebUrlSettings,
    pub gestures: GestureSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
}

/// Tab bar and tab lifecycle behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSettings {
    pub hide_tabs_with_one_tab: bool,
    pub dont_quit_with_one_tab: bool,
    /// Tab-list button shows recently closed tabs instead of open ones.
    pub closed_instead_opened_tabs: bool,
    pub new_tab_after_active: bool,
    #[serde(default = "default_closed_tabs_capacity")]
    pub closed_tabs_capacity: usize,
}

fn default_closed_tabs_capacity() -> usize {
    10
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            hide_tabs_with_one_tab: false,
            dont_quit_with_one_tab: false,
            closed_instead_opened_tabs: false,
            new_tab_after_active: true,
            closed_tabs_capacity: default_closed_tabs_capacity(),
        }
    }
}

/// URLs used when a tab has nothing else to show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebUrlSettings {
    pub new_tab_url: String,
    pub homepage: String,
}

impl Default for WebUrlSettings {
    fn default() -> Self {
        Self {
            new_tab_url: "about:speeddial".to_string(),
            homepage: "about:home".to_string(),
        }
    }
}

/// Mouse gesture plugin settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSettings {
    pub enabled: bool,
    pub trigger_button: MouseButton,
    /// Strokes shorter than this many pixels are ignored.
    pub min_movement: u32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            trigger_button: MouseButton::Middle,
            min_movement: 20,
        }
    }
}

/// Which profile directory holds the persisted tab state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSettings {
    pub name: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
        }
    }
}
