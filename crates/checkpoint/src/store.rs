//! Checkpoint storage trait and the no-op backend.

use anyhow::Result;

use crate::CheckpointFile;

/// Trait for checkpoint storage operations.
///
/// This trait abstracts the storage backend so the same resume logic works
/// with a JSON file or with no persistence at all.
pub trait CheckpointStore {
    /// Load the state for `table`.
    ///
    /// Returns an empty state when nothing has been stored yet.
    fn load(&self, table: &str) -> Result<CheckpointFile>;

    /// Persist `checkpoint`, replacing any previous state.
    fn save(&self, checkpoint: &CheckpointFile) -> Result<()>;
}

/// Store that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl CheckpointStore for NullStore {
    fn load(&self, table: &str) -> Result<CheckpointFile> {
        Ok(CheckpointFile::new(table))
    }

    fn save(&self, checkpoint: &CheckpointFile) -> Result<()> {
        tracing::debug!(
            "Checkpoint storage disabled, dropping {} applied ids for {}",
            checkpoint.len(),
            checkpoint.table
        );
        Ok(())
    }
}
