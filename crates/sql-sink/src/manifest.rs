//! JSON manifest sink.
//!
//! The manifest is the hand-off format for a separate execution tool: an
//! ordered array of `{id, code, name, sql}` objects.

use crate::{SinkError, SinkSummary, StatementSink};
use anyhow::{Context, Result};
use sector_core::GeneratedStatement;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ManifestSink {
    path: PathBuf,
}

impl ManifestSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatementSink for ManifestSink {
    fn write(&self, statements: &[GeneratedStatement]) -> Result<SinkSummary> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(statements).map_err(SinkError::from)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write manifest: {}", self.path.display()))?;

        info!(
            "Wrote manifest with {} statements to {}",
            statements.len(),
            self.path.display()
        );

        Ok(SinkSummary {
            statements: statements.len(),
            files: vec![self.path.clone()],
        })
    }
}

/// Load a manifest written by [`ManifestSink`].
pub fn read_manifest(path: &Path) -> Result<Vec<GeneratedStatement>, SinkError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
