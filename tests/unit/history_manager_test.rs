//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise recording, listing, the 50-entry cap, and clearing
//! through the `HistoryManagerTrait` interface, using an in-memory SQLite
//! database.

use linkshort::database::Database;
use linkshort::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_CAP};

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Recording stores the entry with its fields intact.
#[test]
fn test_record_stores_entry_fields() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    let id = mgr
        .record("https://example.com/page", "https://is.gd/abc12")
        .unwrap();

    let entries = mgr.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].long_url, "https://example.com/page");
    assert_eq!(entries[0].short_url, "https://is.gd/abc12");
    assert!(entries[0].created_at > 0);
}

/// Listing returns entries newest first.
#[test]
fn test_list_is_newest_first() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    for i in 0..5 {
        mgr.record(
            &format!("https://example.com/{}", i),
            &format!("https://is.gd/x{}", i),
        )
        .unwrap();
    }

    let entries = mgr.list().unwrap();
    assert_eq!(entries.len(), 5);
    for (pos, entry) in entries.iter().enumerate() {
        assert_eq!(entry.short_url, format!("https://is.gd/x{}", 4 - pos));
    }
}

/// Recording past the cap truncates the store to exactly HISTORY_CAP
/// entries, evicting the oldest.
#[test]
fn test_cap_evicts_oldest() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    for i in 0..(HISTORY_CAP + 1) {
        mgr.record(
            &format!("https://example.com/{}", i),
            &format!("https://is.gd/x{}", i),
        )
        .unwrap();
    }

    let entries = mgr.list().unwrap();
    assert_eq!(entries.len(), HISTORY_CAP);

    // The very first record (x0) is gone; the newest (x50) is on top
    assert!(entries.iter().all(|e| e.short_url != "https://is.gd/x0"));
    assert_eq!(entries[0].short_url, "https://is.gd/x50");
    assert_eq!(
        entries[HISTORY_CAP - 1].short_url,
        "https://is.gd/x1",
        "the oldest surviving entry should be the second one recorded"
    );
}

/// clear_all removes every entry from a non-empty store.
#[test]
fn test_clear_all_empties_history() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    mgr.record("https://example.com/", "https://is.gd/a1234").unwrap();
    mgr.record("https://rust-lang.org/", "https://is.gd/b1234").unwrap();
    mgr.record("https://crates.io/", "https://is.gd/c1234").unwrap();

    assert_eq!(mgr.list().unwrap().len(), 3);

    mgr.clear_all().unwrap();

    assert_eq!(mgr.list().unwrap().len(), 0);
}

/// clear_all on an already-empty store is fine.
#[test]
fn test_clear_all_on_empty_store() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    mgr.clear_all().unwrap();
    assert_eq!(mgr.list().unwrap().len(), 0);
}

/// Duplicate URLs are stored as separate entries; there is no uniqueness
/// constraint on the original URL.
#[test]
fn test_duplicate_urls_are_separate_entries() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    let id1 = mgr.record("https://example.com/", "https://is.gd/a1234").unwrap();
    let id2 = mgr.record("https://example.com/", "https://is.gd/a1234").unwrap();

    assert_ne!(id1, id2);
    assert_eq!(mgr.list().unwrap().len(), 2);
}
