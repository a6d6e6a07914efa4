//! Tab Widget.
//!
//! Ordered container of open tabs. Every tab pairs a [`BrowserView`] with its
//! [`LocationBar`](crate::types::tab::LocationBar). Pinned tabs always occupy
//! the front of the order. Closed tabs go to a bounded
//! [`ClosedTabsManager`] so they can be reopened with their history.
//!
//! The widget does not talk to the window directly: it queues [`TabEvent`]s
//! which the window drains after each operation.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::BrowserView;
use crate::managers::closed_tabs_manager::{ClosedTabsManager, ClosedTabsManagerTrait};
use crate::storage::codec;
use crate::types::closed_tab::ClosedTabEntry;
use crate::types::errors::TabError;
use crate::types::session::{SessionEntry, SessionKind, SessionRecord};
use crate::types::settings::{BrowserSettings, TabSettings};
use crate::types::tab::{
    CloseOutcome, ClosedTabSummary, OpenPolicy, Placement, Tab, TabEvent, TabListMenu,
    TabSummary, DEFAULT_TAB_TITLE,
};

/// Titles longer than this are shortened in the tab list.
const TAB_LIST_TITLE_MAX: usize = 40;

pub struct TabWidget<V: BrowserView> {
    tabs: Vec<Tab<V>>,
    current: Option<usize>,
    settings: TabSettings,
    new_tab_url: String,
    closed_tabs: ClosedTabsManager,
    /// Tab that was current before the last selected open.
    previous_tab: Option<Uuid>,
    /// Closing the current tab returns to `previous_tab` while this is set.
    closing_to_previous: bool,
    /// Index of the last tab opened in the background.
    last_background_index: Option<usize>,
    tab_bar_visible: bool,
    events: Vec<TabEvent>,
}

impl<V: BrowserView> TabWidget<V> {
    pub fn new(settings: &BrowserSettings) -> Self {
        Self {
            tabs: Vec::new(),
            current: None,
            settings: settings.tabs.clone(),
            new_tab_url: settings.web.new_tab_url.clone(),
            closed_tabs: ClosedTabsManager::new(settings.tabs.closed_tabs_capacity),
            previous_tab: None,
            closing_to_previous: false,
            last_background_index: None,
            tab_bar_visible: true,
            events: Vec::new(),
        }
    }

    /// Applies changed settings to an existing widget.
    pub fn load_settings(&mut self, settings: &BrowserSettings) {
        self.settings = settings.tabs.clone();
        self.new_tab_url = settings.web.new_tab_url.clone();
        self.closed_tabs.set_capacity(settings.tabs.closed_tabs_capacity);
        self.update_tab_bar_visibility();
    }

    // --- queries ---

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_tab(&self) -> Option<&Tab<V>> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    pub fn tab(&self, index: usize) -> Option<&Tab<V>> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab<V>> {
        self.tabs.get_mut(index)
    }

    pub fn tabs(&self) -> &[Tab<V>] {
        &self.tabs
    }

    /// Tabs in order, optionally skipping pinned ones.
    pub fn all_tabs(&self, with_pinned: bool) -> Vec<&Tab<V>> {
        self.tabs
            .iter()
            .filter(|t| with_pinned || !t.pinned)
            .collect()
    }

    pub fn pinned_count(&self) -> usize {
        self.tabs.iter().take_while(|t| t.pinned).count()
    }

    /// Text shown on the tab bar for `index`; empty for pinned tabs.
    pub fn tab_text(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.display_text())
    }

    pub fn tab_bar_visible(&self) -> bool {
        self.tab_bar_visible
    }

    pub fn closed_tabs(&self) -> &ClosedTabsManager {
        &self.closed_tabs
    }

    pub fn can_restore_tab(&self) -> bool {
        self.closed_tabs.is_available()
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Takes all pending notifications.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }

    /// Summary rows for the "list of tabs" menu.
    pub fn tab_list(&self) -> Vec<TabSummary> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let loading = tab.view.is_loading();
                let title = if tab.view.title().is_empty() {
                    let placeholder = if loading { "Loading..." } else { "No Named Page" };
                    placeholder.to_string()
                } else {
                    shorten_title(tab.view.title())
                };
                TabSummary {
                    index,
                    title,
                    active: self.current == Some(index),
                    pinned: tab.pinned,
                    loading,
                }
            })
            .collect()
    }

    /// Summary rows for the recently-closed menu, most recent first.
    pub fn closed_tab_list(&self) -> Vec<ClosedTabSummary> {
        self.closed_tabs
            .all()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| ClosedTabSummary {
                index,
                title: shorten_title(&entry.title),
                url: entry.url.clone(),
            })
            .collect()
    }

    /// Menu behind the tab-list button: closed tabs when
    /// `closed_instead_opened_tabs` is set, open tabs otherwise.
    pub fn tab_list_menu(&self) -> TabListMenu {
        if self.settings.closed_instead_opened_tabs {
            TabListMenu::Closed(self.closed_tab_list())
        } else {
            TabListMenu::Open(self.tab_list())
        }
    }

    // --- lifecycle ---

    /// Opens `url` in a new tab titled "New tab". Returns the new index.
    pub fn open(&mut self, url: &str, policy: OpenPolicy) -> usize {
        self.open_titled(url, DEFAULT_TAB_TITLE, policy)
    }

    /// Opens `url` in a new tab with the given title. Returns the new index.
    ///
    /// An empty URL becomes the new-tab page unless `policy.clean` is set.
    pub fn open_titled(&mut self, url: &str, title: &str, policy: OpenPolicy) -> usize {
        self.previous_tab = self.current_tab().map(|t| t.id);

        let url = if url.is_empty() && !policy.clean {
            self.new_tab_url.clone()
        } else {
            url.to_string()
        };

        let index = self.resolve_position(policy);
        self.tabs.insert(index, Tab::new(V::default(), title));
        if let Some(cur) = self.current {
            if index <= cur {
                self.current = Some(cur + 1);
            }
        }
        self.events.push(TabEvent::TabAdded { index });

        if policy.select || self.current.is_none() {
            self.switch_current(index);
        }
        if !policy.select {
            self.last_background_index = Some(index);
        }

        self.update_tab_bar_visibility();

        if !url.is_empty() {
            self.tabs[index].load(&url);
        }
        if policy.select {
            self.closing_to_previous = true;
        }

        debug!(index, url = %url, select = policy.select, "opened tab");
        self.events.push(TabEvent::StateChanged);
        index
    }

    /// Closes the tab at `index`.
    ///
    /// The last remaining tab is never removed: it is reset to the new-tab
    /// page or the window is asked to close, depending on settings.
    pub fn close(&mut self, index: usize) -> Result<CloseOutcome, TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }

        if self.tabs.len() == 1 {
            if self.settings.dont_quit_with_one_tab {
                let url = self.new_tab_url.clone();
                self.tabs[0].load(&url);
                return Ok(CloseOutcome::Reset);
            }
            self.events.push(TabEvent::WindowCloseRequested);
            return Ok(CloseOutcome::WindowCloseRequested);
        }

        if self.tabs[index].pinned {
            self.events.push(TabEvent::PinnedTabRemoved);
        }

        let return_to = if self.closing_to_previous && self.current == Some(index) {
            self.previous_tab
        } else {
            None
        };

        let tab = self.tabs.remove(index);
        self.closed_tabs.save_tab(ClosedTabEntry {
            url: tab.view.url().to_string(),
            title: tab.page_title().to_string(),
            history: codec::encode_history(tab.view.history()),
            position: index,
        });
        self.events.push(TabEvent::TabClosed { index });

        match self.current {
            Some(cur) if cur == index => {
                let fallback = index.min(self.tabs.len() - 1);
                let next = return_to
                    .and_then(|id| self.position_of(id))
                    .unwrap_or(fallback);
                self.current = None;
                self.switch_current(next);
            }
            Some(cur) if cur > index => self.current = Some(cur - 1),
            _ => {}
        }

        self.update_tab_bar_visibility();
        self.last_background_index = None;

        info!(index, url = %tab.view.url(), "closed tab");
        self.events.push(TabEvent::StateChanged);
        Ok(CloseOutcome::Closed)
    }

    pub fn close_current(&mut self) -> Result<CloseOutcome, TabError> {
        let index = self.current.ok_or(TabError::InvalidIndex(0))?;
        self.close(index)
    }

    /// Closes every unpinned tab except the one at `index`.
    pub fn close_all_but(&mut self, index: usize) -> Result<(), TabError> {
        let keep = self
            .tabs
            .get(index)
            .map(|t| t.id)
            .ok_or(TabError::InvalidIndex(index))?;

        let doomed: Vec<Uuid> = self
            .tabs
            .iter()
            .filter(|t| !t.pinned && t.id != keep)
            .map(|t| t.id)
            .collect();

        for id in doomed {
            if let Some(pos) = self.position_of(id) {
                self.close(pos)?;
            }
        }
        Ok(())
    }

    /// Opens a background copy of the tab at `index`, history included.
    pub fn duplicate(&mut self, index: usize) -> Result<usize, TabError> {
        let source = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        let url = source.view.url().to_string();
        let title = source.page_title().to_string();
        let history = source.view.history().clone();

        let new_index = self.open_titled(&url, &title, OpenPolicy::background().clean());
        let tab = &mut self.tabs[new_index];
        tab.view.restore_history(history);
        tab.location_bar.sync_from(&tab.view);
        Ok(new_index)
    }

    /// Moves a tab, keeping pinned tabs in front of unpinned ones.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<(), TabError> {
        let len = self.tabs.len();
        if from >= len {
            return Err(TabError::InvalidIndex(from));
        }
        if to >= len {
            return Err(TabError::InvalidIndex(to));
        }

        let pinned = self.pinned_count();
        let to = if self.tabs[from].pinned {
            to.min(pinned - 1)
        } else {
            to.max(pinned)
        };
        if from == to {
            return Ok(());
        }

        self.shift_tab(from, to);
        self.closing_to_previous = false;
        self.last_background_index = None;
        self.events.push(TabEvent::TabMoved { from, to });
        self.events.push(TabEvent::StateChanged);
        Ok(())
    }

    /// Pins a tab, moving it to the end of the pinned section.
    pub fn pin(&mut self, index: usize) -> Result<usize, TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        if tab.pinned {
            return Ok(index);
        }

        let target = self.pinned_count();
        self.tabs[index].pinned = true;
        self.shift_tab(index, target);
        self.events.push(TabEvent::PinnedTabAdded);
        self.events.push(TabEvent::StateChanged);
        Ok(target)
    }

    /// Unpins a tab, moving it to the start of the unpinned section.
    pub fn unpin(&mut self, index: usize) -> Result<usize, TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        if !tab.pinned {
            return Ok(index);
        }

        self.tabs[index].pinned = false;
        let target = self.pinned_count_excluding(index);
        self.shift_tab(index, target);
        self.events.push(TabEvent::PinnedTabRemoved);
        self.events.push(TabEvent::StateChanged);
        Ok(target)
    }

    pub fn set_current(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.current != Some(index) {
            self.switch_current(index);
        }
        Ok(())
    }

    // --- closed tabs ---

    /// Reopens the most recently closed tab at its old position.
    pub fn restore_last_closed(&mut self) -> Result<usize, TabError> {
        let entry = self
            .closed_tabs
            .take_first()
            .ok_or(TabError::NothingToRestore)?;
        Ok(self.restore_closed_entry(entry, true))
    }

    /// Reopens entry `index` of the closed-tab list.
    pub fn restore_closed_at(&mut self, index: usize) -> Result<usize, TabError> {
        let entry = self
            .closed_tabs
            .take_at(index)
            .ok_or(TabError::InvalidIndex(index))?;
        Ok(self.restore_closed_entry(entry, true))
    }

    /// Reopens every closed tab, most recent first, and empties the list.
    /// Returns how many tabs were reopened.
    pub fn restore_all_closed(&mut self) -> usize {
        let mut restored = 0;
        while let Some(entry) = self.closed_tabs.take_first() {
            self.restore_closed_entry(entry, false);
            restored += 1;
        }
        restored
    }

    pub fn clear_closed_tabs(&mut self) {
        self.closed_tabs.clear();
    }

    fn restore_closed_entry(&mut self, entry: ClosedTabEntry, at_position: bool) -> usize {
        let mut policy = OpenPolicy::selected().clean();
        if at_position {
            policy = policy.at(entry.position);
        }
        let index = self.open_titled("", &entry.title, policy);
        self.replay(index, &entry.url, &entry.history);
        info!(index, url = %entry.url, "restored closed tab");
        index
    }

    // --- per-tab navigation ---

    pub fn load_in_tab(&mut self, index: usize, url: &str) -> Result<(), TabError> {
        self.tab_mut_or_err(index)?.load(url);
        Ok(())
    }

    pub fn back_tab(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tab_mut_or_err(index)?;
        tab.view.back();
        tab.location_bar.sync_from(&tab.view);
        Ok(())
    }

    pub fn forward_tab(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tab_mut_or_err(index)?;
        tab.view.forward();
        tab.location_bar.sync_from(&tab.view);
        Ok(())
    }

    pub fn reload_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.tab_mut_or_err(index)?.view.reload();
        Ok(())
    }

    pub fn stop_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.tab_mut_or_err(index)?.view.stop();
        Ok(())
    }

    pub fn reload_all_tabs(&mut self) {
        for tab in &mut self.tabs {
            tab.view.reload();
        }
    }

    // --- persistence ---

    /// Snapshot of the pinned tabs, in order.
    pub fn pinned_record(&self) -> SessionRecord {
        SessionRecord {
            entries: self
                .tabs
                .iter()
                .filter(|t| t.pinned)
                .map(session_entry)
                .collect(),
            active_index: None,
        }
    }

    /// Snapshot of the unpinned tabs plus the current index.
    pub fn session_record(&self) -> SessionRecord {
        SessionRecord {
            entries: self
                .tabs
                .iter()
                .filter(|t| !t.pinned)
                .map(session_entry)
                .collect(),
            active_index: self.current.map(|i| i as i32),
        }
    }

    /// Encoded full-session snapshot.
    pub fn save_state(&self) -> Vec<u8> {
        codec::encode_session(&self.session_record(), SessionKind::Full)
    }

    /// Restores tabs from an encoded full-session snapshot.
    ///
    /// Returns `false` without touching the tabs when the data is empty or
    /// cannot be decoded.
    pub fn restore_state(&mut self, data: &[u8]) -> bool {
        if data.is_empty() {
            return false;
        }
        match codec::decode_session(data, SessionKind::Full) {
            Ok(record) => {
                self.restore_session(&record);
                true
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed session state");
                false
            }
        }
    }

    /// Opens the tabs of a full-session snapshot and reselects its current tab.
    pub fn restore_session(&mut self, record: &SessionRecord) {
        for entry in &record.entries {
            self.restore_entry(entry);
        }
        if let Some(active) = record.active_index {
            if active >= 0 {
                let _ = self.set_current(active as usize);
            }
        }
        info!(tabs = record.entries.len(), "restored session");
    }

    /// Opens the tabs of a pinned snapshot as pinned tabs at the front.
    pub fn restore_pinned(&mut self, record: &SessionRecord) {
        for entry in &record.entries {
            let index = self.restore_entry(entry);
            // The index is always valid: it was just returned by open.
            let _ = self.pin(index);
        }
        info!(tabs = record.entries.len(), "restored pinned tabs");
    }

    fn restore_entry(&mut self, entry: &SessionEntry) -> usize {
        if entry.history.is_empty() {
            self.open(&entry.url, OpenPolicy::selected().at_end())
        } else {
            let index = self.open("", OpenPolicy::selected().clean().at_end());
            self.replay(index, &entry.url, &entry.history);
            index
        }
    }

    // --- internals ---

    /// Replays an encoded history into a tab, then shows `url`.
    fn replay(&mut self, index: usize, url: &str, history: &[u8]) {
        let tab = &mut self.tabs[index];
        if !history.is_empty() {
            match codec::decode_history(history) {
                Ok(decoded) => tab.view.restore_history(decoded),
                Err(e) => warn!(index, error = %e, "dropping undecodable tab history"),
            }
        }
        let showing = tab.view.history().current_item().map(|i| i.url.as_str());
        if showing != Some(url) {
            tab.load(url);
        } else {
            tab.location_bar.sync_from(&tab.view);
        }
    }

    fn resolve_position(&self, policy: OpenPolicy) -> usize {
        let len = self.tabs.len();
        let pinned = self.pinned_count();

        let after_active = match policy.placement {
            Placement::At(index) => return index.clamp(pinned, len),
            Placement::End => false,
            Placement::AfterActive => true,
            Placement::Auto => self.settings.new_tab_after_active,
        };
        if !after_active {
            return len;
        }

        // A background tab opened from a pinned tab must not land between pinned tabs.
        let position = match self.last_background_index {
            Some(bg) if !policy.select => bg + 1,
            _ => self.current.map_or(0, |c| c + 1).max(pinned),
        };
        position.clamp(pinned, len)
    }

    /// Moves a tab without clamping, keeping `current` on the same tab.
    fn shift_tab(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        if let Some(cur) = self.current {
            let moved = if cur == from {
                to
            } else if from < cur && cur <= to {
                cur - 1
            } else if to <= cur && cur < from {
                cur + 1
            } else {
                cur
            };
            self.current = Some(moved);
        }
    }

    fn pinned_count_excluding(&self, index: usize) -> usize {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(i, t)| *i != index && t.pinned)
            .count()
    }

    fn switch_current(&mut self, index: usize) {
        self.current = Some(index);
        self.closing_to_previous = false;
        self.last_background_index = None;
        let tab = &mut self.tabs[index];
        tab.location_bar.sync_from(&tab.view);
        self.events.push(TabEvent::CurrentChanged { index });
    }

    fn update_tab_bar_visibility(&mut self) {
        let visible = !(self.tabs.len() == 1 && self.settings.hide_tabs_with_one_tab);
        if visible != self.tab_bar_visible {
            self.tab_bar_visible = visible;
            self.events.push(TabEvent::TabBarVisibilityChanged { visible });
        }
    }

    fn tab_mut_or_err(&mut self, index: usize) -> Result<&mut Tab<V>, TabError> {
        self.tabs.get_mut(index).ok_or(TabError::InvalidIndex(index))
    }
}

fn session_entry<V: BrowserView>(tab: &Tab<V>) -> SessionEntry {
    let history = if tab.view.history().is_empty() {
        Vec::new()
    } else {
        codec::encode_history(tab.view.history())
    };
    SessionEntry {
        url: tab.view.url().to_string(),
        history,
    }
}

fn shorten_title(title: &str) -> String {
    if title.chars().count() > TAB_LIST_TITLE_MAX {
        let mut short: String = title.chars().take(TAB_LIST_TITLE_MAX).collect();
        short.push_str("..");
        short
    } else {
        title.to_string()
    }
}
