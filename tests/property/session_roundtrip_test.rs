//! Property-based tests for session save-restore round-trip.
//!
//! For any snapshot, writing it through the SessionManager and reading it
//! back yields the same record, and a tab widget restored from its own saved
//! state shows the same pages in the same order.

use proptest::prelude::*;
use tempfile::TempDir;
use webtabs::engine::{BrowserView, HeadlessView};
use webtabs::managers::session_manager::{SessionManager, SessionManagerTrait};
use webtabs::managers::tab_widget::TabWidget;
use webtabs::storage::ProfileDir;
use webtabs::types::session::{SessionEntry, SessionKind, SessionRecord};
use webtabs::types::settings::BrowserSettings;
use webtabs::types::tab::OpenPolicy;

// --- Arbitrary strategies for session types ---

fn arb_entry() -> impl Strategy<Value = SessionEntry> {
    ("\\PC{0,40}", prop::collection::vec(any::<u8>(), 0..64))
        .prop_map(|(url, history)| SessionEntry { url, history })
}

fn arb_record() -> impl Strategy<Value = SessionRecord> {
    (
        prop::collection::vec(arb_entry(), 0..8),
        proptest::option::of(0i32..100),
    )
        .prop_map(|(entries, active_index)| SessionRecord {
            entries,
            active_index,
        })
}

fn arb_url() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,12}", proptest::option::of("/[a-z0-9]{1,10}"))
        .prop_map(|(host, path)| format!("https://{}.example{}", host, path.unwrap_or_default()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn full_session_roundtrip(record in arb_record()) {
        let dir = TempDir::new().unwrap();
        let manager = SessionManager::new(ProfileDir::open(dir.path()).unwrap());

        manager.save(SessionKind::Full, &record).unwrap();
        let restored = manager.restore(SessionKind::Full).unwrap();

        prop_assert_eq!(restored, record);
    }

    #[test]
    fn pinned_session_roundtrip_drops_active_index(record in arb_record()) {
        let dir = TempDir::new().unwrap();
        let manager = SessionManager::new(ProfileDir::open(dir.path()).unwrap());

        manager.save(SessionKind::Pinned, &record).unwrap();
        let restored = manager.restore(SessionKind::Pinned).unwrap();

        prop_assert_eq!(restored.entries, record.entries);
        prop_assert_eq!(restored.active_index, None);
    }

    #[test]
    fn widget_state_roundtrip_preserves_tab_order(
        urls in prop::collection::vec(arb_url(), 1..8),
        extra_loads in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut w: TabWidget<HeadlessView> = TabWidget::new(&BrowserSettings::default());
        for (i, url) in urls.iter().enumerate() {
            let index = w.open(url, OpenPolicy::background().at_end());
            if extra_loads[i] {
                w.load_in_tab(index, &format!("{}/next", url)).unwrap();
            }
        }
        let expected: Vec<String> = w.tabs().iter().map(|t| t.view.url().to_string()).collect();
        let expected_depth: Vec<usize> = w.tabs().iter().map(|t| t.view.history().count()).collect();

        let mut restored: TabWidget<HeadlessView> = TabWidget::new(&BrowserSettings::default());
        prop_assert!(restored.restore_state(&w.save_state()));

        let actual: Vec<String> = restored.tabs().iter().map(|t| t.view.url().to_string()).collect();
        let actual_depth: Vec<usize> = restored.tabs().iter().map(|t| t.view.history().count()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(actual_depth, expected_depth);
        prop_assert_eq!(restored.current_index(), w.current_index());
    }
}
