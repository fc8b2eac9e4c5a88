//! Unit tests for the linkshort database layer (connection + migrations).

use linkshort::database::{migrations, Database};

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    for table in ["history", "schema_version"] {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_migrations_create_indexes() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name=?1",
            ["idx_history_created_at"],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "idx_history_created_at should exist after migrations");
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    // Running the full migration set again must not fail or re-apply anything
    migrations::run_all(db.connection()).expect("second run should be a no-op");
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_open_on_disk_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkshort.db");
    {
        let _db = Database::open(&path).expect("open failed");
    }
    assert!(path.exists(), "database file should be created on open");
}
