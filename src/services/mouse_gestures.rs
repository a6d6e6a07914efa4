//! Mouse Gestures plugin.
//!
//! Feeds pointer events from a tab's view into the [`GestureRecognizer`] and
//! reports which tab a recognized gesture applies to.

use crate::services::gesture_recognizer::{GestureRecognizer, GestureRecognizerTrait};
use crate::types::gesture::{GestureAction, PointerEvent};
use crate::types::settings::GestureSettings;

/// A recognized gesture bound to the tab it was drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureCommand {
    pub tab_index: usize,
    pub action: GestureAction,
}

pub struct MouseGestures {
    recognizer: GestureRecognizer,
    enabled: bool,
    /// Tab whose view received the press.
    target_tab: Option<usize>,
}

impl MouseGestures {
    pub fn new(settings: &GestureSettings) -> Self {
        Self {
            recognizer: GestureRecognizer::with_default_patterns(
                settings.trigger_button,
                settings.min_movement,
            ),
            enabled: settings.enabled,
            target_tab: None,
        }
    }

    pub fn load_settings(&mut self, settings: &GestureSettings) {
        self.enabled = settings.enabled;
        self.recognizer.set_trigger(settings.trigger_button);
        self.recognizer.set_min_movement(settings.min_movement);
        self.target_tab = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut GestureRecognizer {
        &mut self.recognizer
    }

    /// Handles a button press on the view of `tab_index`.
    ///
    /// Presses are never consumed so the view still sees them.
    pub fn mouse_press(&mut self, tab_index: usize, event: PointerEvent) -> bool {
        if self.enabled && self.recognizer.press(event) {
            self.target_tab = Some(tab_index);
        }
        false
    }

    pub fn mouse_move(&mut self, event: PointerEvent) -> bool {
        if self.enabled {
            self.recognizer.motion(event);
        }
        false
    }

    /// Handles a button release. A returned command means the release was consumed.
    pub fn mouse_release(&mut self, event: PointerEvent) -> Option<GestureCommand> {
        if !self.enabled {
            return None;
        }
        let action = self.recognizer.release(event)?;
        let tab_index = self.target_tab.take()?;
        Some(GestureCommand { tab_index, action })
    }
}

impl Default for MouseGestures {
    fn default() -> Self {
        Self::new(&GestureSettings::default())
    }
}
