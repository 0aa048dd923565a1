//! Checkpoint file contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persisted resume state for one target table.
///
/// # File Format
///
/// ```json
/// {
///     "table": "SETORES",
///     "applied_ids": [1, 2, 3, 4, 5],
///     "updated_at": "2024-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointFile {
    /// Target table the ids were applied to
    pub table: String,
    /// Ids already present in the target table
    pub applied_ids: BTreeSet<i64>,
    /// Last time `applied_ids` changed
    pub updated_at: DateTime<Utc>,
}

impl CheckpointFile {
    /// Empty state for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            applied_ids: BTreeSet::new(),
            updated_at: Utc::now(),
        }
    }

    /// Merge `ids` into the applied set and refresh `updated_at`.
    ///
    /// Returns how many ids were not already recorded.
    pub fn mark_applied(&mut self, ids: impl IntoIterator<Item = i64>) -> usize {
        let before = self.applied_ids.len();
        self.applied_ids.extend(ids);
        self.updated_at = Utc::now();
        self.applied_ids.len() - before
    }

    pub fn is_applied(&self, id: i64) -> bool {
        self.applied_ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.applied_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied_ids.is_empty()
    }
}
