//! Property-based tests for the history store's cap and ordering.
//!
//! **Property: bounded, newest-first history.**
//! *For any* number of successful recordings N, the store SHALL hold
//! min(N, 50) entries, most recent first, and clearing SHALL always empty it.

use linkshort::database::Database;
use linkshort::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_CAP};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn store_holds_min_n_cap_newest_first(n in 1usize..120) {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        let mut manager = HistoryManager::new(db.connection());

        for i in 0..n {
            manager
                .record(
                    &format!("https://example.com/{}", i),
                    &format!("https://is.gd/s{}", i),
                )
                .expect("record should succeed");
        }

        let entries = manager.list().expect("list should succeed");
        prop_assert_eq!(entries.len(), n.min(HISTORY_CAP));

        // Newest first: entry k holds the (n-1-k)-th recording
        for (k, entry) in entries.iter().enumerate() {
            let expected = format!("https://is.gd/s{}", n - 1 - k);
            prop_assert_eq!(&entry.short_url, &expected);
        }

        // Timestamps never increase going down the listing
        for pair in entries.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn clearing_any_store_empties_it(n in 0usize..80) {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        let mut manager = HistoryManager::new(db.connection());

        for i in 0..n {
            manager
                .record(
                    &format!("https://example.com/{}", i),
                    &format!("https://is.gd/s{}", i),
                )
                .expect("record should succeed");
        }

        manager.clear_all().expect("clear_all should succeed");
        prop_assert_eq!(manager.list().expect("list should succeed").len(), 0);
    }
}
