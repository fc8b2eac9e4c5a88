//! History store for linkshort.
//!
//! Implements `HistoryManagerTrait` — recording successful shortenings,
//! listing them newest first, and clearing the store, backed by SQLite via
//! `rusqlite`. The store is bounded: recording past the cap evicts the
//! oldest entries.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use uuid::Uuid;

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Maximum number of stored entries. Recording beyond this truncates the
/// oldest rows away.
pub const HISTORY_CAP: usize = 50;

/// Trait defining history store operations.
pub trait HistoryManagerTrait {
    fn record(&mut self, long_url: &str, short_url: &str) -> Result<String, HistoryError>;
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
}

/// History store backed by a SQLite connection.
pub struct HistoryManager<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Reads a single `HistoryEntry` row into a struct.
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            long_url: row.get(1)?,
            short_url: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records one successful shortening and truncates the store to
    /// `HISTORY_CAP` entries. Returns the new entry ID.
    fn record(&mut self, long_url: &str, short_url: &str) -> Result<String, HistoryError> {
        let id = Uuid::new_v4().to_string();
        let now = Self::now_millis();

        self.conn
            .execute(
                "INSERT INTO history (id, long_url, short_url, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![id, long_url, short_url, now],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        // Keep the newest HISTORY_CAP rows; rowid breaks same-millisecond ties.
        let evicted = self
            .conn
            .execute(
                "DELETE FROM history WHERE id NOT IN (
                     SELECT id FROM history ORDER BY created_at DESC, rowid DESC LIMIT ?1
                 )",
                params![HISTORY_CAP as i64],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        if evicted > 0 {
            debug!(evicted, "history cap reached, oldest entries dropped");
        }

        Ok(id)
    }

    /// Lists all stored entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, long_url, short_url, created_at \
                 FROM history ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| HistoryError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }

    /// Removes every stored entry.
    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn
            .execute("DELETE FROM history", [])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
