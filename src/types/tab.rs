use uuid::Uuid;

use crate::engine::BrowserView;

/// Default title given to a freshly opened tab.
pub const DEFAULT_TAB_TITLE: &str = "New tab";

/// Address-bar widget state owned by a tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationBar {
    text: String,
    focused: bool,
}

impl LocationBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the edit text, as when the user types.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Mirrors the view's URL unless the user is editing.
    pub fn sync_from<V: BrowserView>(&mut self, view: &V) {
        if !self.focused {
            self.text = view.url().to_string();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// An open tab: a navigation view paired with its address bar.
#[derive(Debug)]
pub struct Tab<V> {
    pub id: Uuid,
    pub title: String,
    pub pinned: bool,
    pub view: V,
    pub location_bar: LocationBar,
}

impl<V: BrowserView> Tab<V> {
    pub fn new(view: V, title: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            pinned: false,
            view,
            location_bar: LocationBar::new(),
        }
    }

    /// The page's own title, or the title the tab was opened with while the
    /// page has not reported one.
    pub fn page_title(&self) -> &str {
        match self.view.title() {
            "" => &self.title,
            title => title,
        }
    }

    /// Title shown on the tab bar; pinned tabs show only their icon.
    pub fn display_text(&self) -> &str {
        if self.pinned {
            ""
        } else {
            self.page_title()
        }
    }

    /// Loads `url` into the view and updates the address bar.
    pub fn load(&mut self, url: &str) {
        self.view.load(url);
        self.location_bar.sync_from(&self.view);
    }
}

/// Where a new tab lands in the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// After the active tab when `new_tab_after_active` is set, else at the end.
    #[default]
    Auto,
    End,
    AfterActive,
    At(usize),
}

/// How a tab is opened: selection, URL substitution and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenPolicy {
    /// Make the new tab current.
    pub select: bool,
    /// Keep an empty URL empty instead of substituting the new-tab page.
    pub clean: bool,
    pub placement: Placement,
}

impl OpenPolicy {
    pub fn selected() -> Self {
        Self {
            select: true,
            ..Self::default()
        }
    }

    pub fn background() -> Self {
        Self::default()
    }

    pub fn clean(mut self) -> Self {
        self.clean = true;
        self
    }

    pub fn at_end(mut self) -> Self {
        self.placement = Placement::End;
        self
    }

    pub fn after_active(mut self) -> Self {
        self.placement = Placement::AfterActive;
        self
    }

    pub fn at(mut self, index: usize) -> Self {
        self.placement = Placement::At(index);
        self
    }
}

/// Result of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed and recorded in the closed-tab list.
    Closed,
    /// The last tab was kept and navigated to the new-tab page.
    Reset,
    /// The last tab was kept and the window was asked to close.
    WindowCloseRequested,
}

/// Notifications for window-level UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    TabAdded { index: usize },
    TabClosed { index: usize },
    /// The window refreshes its history panel on this event.
    CurrentChanged { index: usize },
    TabMoved { from: usize, to: usize },
    /// A tab joined the pinned section; drives the pinned-count indicator.
    PinnedTabAdded,
    /// A pinned tab was closed or unpinned.
    PinnedTabRemoved,
    TabBarVisibilityChanged { visible: bool },
    WindowCloseRequested,
    StateChanged,
}

/// One row of the "list of tabs" data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSummary {
    pub index: usize,
    pub title: String,
    pub active: bool,
    pub pinned: bool,
    pub loading: bool,
}

/// One row of the recently-closed list, in closed-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedTabSummary {
    /// Position in the closed list; pass to `restore_closed_at`.
    pub index: usize,
    pub title: String,
    pub url: String,
}

/// Contents of the tab-list button menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabListMenu {
    /// The open tabs.
    Open(Vec<TabSummary>),
    /// Recently closed tabs, most recent first. An empty list is shown as
    /// "Empty"; otherwise the menu also offers "Restore All" and "Clear list".
    Closed(Vec<ClosedTabSummary>),
}
