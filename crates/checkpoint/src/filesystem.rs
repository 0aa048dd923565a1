//! Filesystem-based checkpoint storage implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::store::CheckpointStore;
use crate::{CheckpointError, CheckpointFile};

/// Filesystem implementation of CheckpointStore trait.
///
/// Stores the checkpoint as a single JSON file.
pub struct FilesystemStore {
    path: PathBuf,
}

impl FilesystemStore {
    /// Create a new FilesystemStore backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file without checking which table it belongs to.
    ///
    /// Returns None if the file doesn't exist.
    pub fn read(&self) -> Result<Option<CheckpointFile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read checkpoint: {}", self.path.display()))?;
        let checkpoint =
            serde_json::from_str(&content).map_err(|source| CheckpointError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(checkpoint))
    }
}

impl CheckpointStore for FilesystemStore {
    fn load(&self, table: &str) -> Result<CheckpointFile> {
        let Some(checkpoint) = self.read()? else {
            tracing::debug!(
                "No checkpoint at {}, starting with an empty state",
                self.path.display()
            );
            return Ok(CheckpointFile::new(table));
        };

        if !checkpoint.table.eq_ignore_ascii_case(table) {
            return Err(CheckpointError::TableMismatch {
                path: self.path.clone(),
                expected: table.to_string(),
                found: checkpoint.table,
            }
            .into());
        }

        tracing::info!(
            "Loaded checkpoint from {}: {} ids already applied to {}",
            self.path.display(),
            checkpoint.len(),
            checkpoint.table
        );
        Ok(checkpoint)
    }

    fn save(&self, checkpoint: &CheckpointFile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_json::to_string_pretty(checkpoint)?)
            .with_context(|| format!("Failed to write checkpoint: {}", self.path.display()))?;
        tracing::info!("Stored checkpoint to {}", self.path.display());
        Ok(())
    }
}
