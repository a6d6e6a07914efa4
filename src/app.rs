//! App Core.
//!
//! Owns the settings engine, the tab widget, session persistence and the
//! mouse gestures plugin, and routes recognized gestures to tab commands.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::engine::{BrowserView, HeadlessView};
use crate::managers::session_manager::{SessionManager, SessionManagerTrait};
use crate::managers::tab_widget::TabWidget;
use crate::services::mouse_gestures::{GestureCommand, MouseGestures};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::ProfileDir;
use crate::types::errors::{SessionError, TabError};
use crate::types::gesture::{GestureAction, PointerEvent};
use crate::types::session::SessionKind;
use crate::types::tab::{OpenPolicy, TabEvent};

/// Central application struct: one browser window and its plugins.
pub struct App<V: BrowserView = HeadlessView> {
    pub settings_engine: SettingsEngine,
    pub tab_widget: TabWidget<V>,
    pub session_manager: SessionManager,
    pub mouse_gestures: MouseGestures,
}

impl<V: BrowserView> App<V> {
    /// Creates a new App.
    ///
    /// `config_path` and `profile_path` override the platform locations.
    pub fn new(
        config_path: Option<PathBuf>,
        profile_path: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        let profile = match profile_path {
            Some(path) => ProfileDir::open(path)?,
            None => ProfileDir::open_named(&settings.profile.name)?,
        };

        Ok(Self {
            tab_widget: TabWidget::new(&settings),
            mouse_gestures: MouseGestures::new(&settings.gestures),
            session_manager: SessionManager::new(profile),
            settings_engine,
        })
    }

    /// Startup sequence: pinned tabs first, then the saved session, and a
    /// new-tab page if nothing was restored.
    pub fn startup(&mut self) {
        if let Some(pinned) = self.session_manager.restore(SessionKind::Pinned) {
            self.tab_widget.restore_pinned(&pinned);
        }
        if let Some(session) = self.session_manager.restore(SessionKind::Full) {
            self.tab_widget.restore_session(&session);
        }
        if self.tab_widget.is_empty() {
            self.tab_widget.open("", OpenPolicy::selected());
        }
        info!(tabs = self.tab_widget.count(), "startup complete");
    }

    /// Shutdown sequence: write the pinned and full session snapshots.
    pub fn shutdown(&mut self) -> Result<(), SessionError> {
        self.session_manager
            .save(SessionKind::Pinned, &self.tab_widget.pinned_record())?;
        self.session_manager
            .save(SessionKind::Full, &self.tab_widget.session_record())?;
        Ok(())
    }

    /// Re-reads settings and pushes them into the widget and plugins.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings().clone();
        self.tab_widget.load_settings(&settings);
        self.mouse_gestures.load_settings(&settings.gestures);
    }

    /// Notifications for the window since the last call.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        self.tab_widget.drain_events()
    }

    // --- pointer input from tab views ---

    pub fn mouse_press(&mut self, tab_index: usize, event: PointerEvent) -> bool {
        self.mouse_gestures.mouse_press(tab_index, event)
    }

    pub fn mouse_move(&mut self, event: PointerEvent) -> bool {
        self.mouse_gestures.mouse_move(event)
    }

    /// Returns whether the release completed a gesture.
    pub fn mouse_release(&mut self, event: PointerEvent) -> Result<bool, TabError> {
        match self.mouse_gestures.mouse_release(event) {
            Some(command) => {
                self.dispatch_gesture(command)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Executes a gesture against the tab it was drawn on.
    pub fn dispatch_gesture(&mut self, command: GestureCommand) -> Result<(), TabError> {
        let GestureCommand { tab_index, action } = command;
        debug!(tab_index, ?action, "dispatching gesture");

        match action {
            GestureAction::Stop => self.tab_widget.stop_tab(tab_index),
            GestureAction::Back => self.tab_widget.back_tab(tab_index),
            GestureAction::Forward => self.tab_widget.forward_tab(tab_index),
            GestureAction::Reload => self.tab_widget.reload_tab(tab_index),
            GestureAction::NewTab => {
                self.tab_widget
                    .open("", OpenPolicy::selected().clean().at_end());
                Ok(())
            }
            GestureAction::CloseTab => self.tab_widget.close(tab_index).map(|_| ()),
            GestureAction::Home => {
                let homepage = self.settings_engine.get_settings().web.homepage.clone();
                self.tab_widget.load_in_tab(tab_index, &homepage)
            }
        }
    }
}
