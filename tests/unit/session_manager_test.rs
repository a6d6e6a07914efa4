//! Unit tests for the SessionManager public API.
//!
//! Each test uses its own temporary profile directory.

use tempfile::TempDir;
use webtabs::managers::session_manager::{SessionManager, SessionManagerTrait};
use webtabs::storage::ProfileDir;
use webtabs::types::session::{SessionEntry, SessionKind, SessionRecord};

fn manager() -> (TempDir, SessionManager) {
    let dir = TempDir::new().unwrap();
    let profile = ProfileDir::open(dir.path()).unwrap();
    (dir, SessionManager::new(profile))
}

fn record(urls: &[&str], active_index: Option<i32>) -> SessionRecord {
    SessionRecord {
        entries: urls
            .iter()
            .enumerate()
            .map(|(i, url)| SessionEntry {
                url: url.to_string(),
                history: vec![i as u8; i + 1],
            })
            .collect(),
        active_index,
    }
}

#[test]
fn test_restore_without_file_is_none() {
    let (_dir, manager) = manager();
    assert!(manager.restore(SessionKind::Pinned).is_none());
    assert!(manager.restore(SessionKind::Full).is_none());
    assert!(!manager.has_session(SessionKind::Full));
}

#[test]
fn test_full_session_roundtrip() {
    let (_dir, manager) = manager();
    let saved = record(&["https://a.example", "https://b.example"], Some(1));

    manager.save(SessionKind::Full, &saved).unwrap();
    assert!(manager.has_session(SessionKind::Full));
    assert!(!manager.has_session(SessionKind::Pinned));

    let restored = manager.restore(SessionKind::Full).unwrap();
    assert_eq!(restored, saved);
}

#[test]
fn test_pinned_snapshot_has_no_active_index() {
    let (_dir, manager) = manager();
    manager
        .save(SessionKind::Pinned, &record(&["https://a.example"], Some(0)))
        .unwrap();

    let restored = manager.restore(SessionKind::Pinned).unwrap();
    assert_eq!(restored.urls(), vec!["https://a.example"]);
    assert_eq!(restored.active_index, None);
}

#[test]
fn test_snapshots_use_separate_files() {
    let (dir, manager) = manager();
    manager
        .save(SessionKind::Pinned, &record(&["https://p.example"], None))
        .unwrap();
    manager
        .save(SessionKind::Full, &record(&["https://f.example"], Some(0)))
        .unwrap();

    assert!(dir.path().join("pinnedtabs.dat").is_file());
    assert!(dir.path().join("session.dat").is_file());
    assert_eq!(
        manager.restore(SessionKind::Pinned).unwrap().urls(),
        vec!["https://p.example"]
    );
    assert_eq!(
        manager.restore(SessionKind::Full).unwrap().urls(),
        vec!["https://f.example"]
    );
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let (_dir, manager) = manager();
    manager
        .save(SessionKind::Full, &record(&["https://old.example"], Some(0)))
        .unwrap();
    manager
        .save(SessionKind::Full, &record(&["https://new.example"], None))
        .unwrap();

    let restored = manager.restore(SessionKind::Full).unwrap();
    assert_eq!(restored.urls(), vec!["https://new.example"]);
    assert_eq!(restored.active_index, None);
}

#[test]
fn test_empty_file_is_nothing_to_restore() {
    let (dir, manager) = manager();
    std::fs::write(dir.path().join("session.dat"), b"").unwrap();
    assert!(!manager.has_session(SessionKind::Full));
    assert!(manager.restore(SessionKind::Full).is_none());
}

#[test]
fn test_malformed_file_is_ignored() {
    let (dir, manager) = manager();
    std::fs::write(dir.path().join("pinnedtabs.dat"), [0, 0, 0, 9, 0, 0]).unwrap();
    assert!(manager.restore(SessionKind::Pinned).is_none());
}

#[test]
fn test_clear_removes_snapshot() {
    let (_dir, manager) = manager();
    manager
        .save(SessionKind::Full, &record(&["https://a.example"], Some(0)))
        .unwrap();
    manager.clear(SessionKind::Full).unwrap();
    assert!(manager.restore(SessionKind::Full).is_none());

    // Clearing again is fine.
    manager.clear(SessionKind::Full).unwrap();
}

#[test]
fn test_empty_record_roundtrip() {
    let (_dir, manager) = manager();
    manager
        .save(SessionKind::Full, &SessionRecord::default())
        .unwrap();
    let restored = manager.restore(SessionKind::Full).unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored.active_index, None);
}
