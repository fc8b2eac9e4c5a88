use serde::{Deserialize, Serialize};

/// A single stored shortening result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
}
