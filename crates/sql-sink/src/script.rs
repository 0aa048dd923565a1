//! Single-script sink.

use crate::{SinkSummary, StatementSink};
use anyhow::{Context, Result};
use sector_core::GeneratedStatement;
use sql_types::{render_script, Dialect, ScriptOptions};
use std::path::PathBuf;
use tracing::info;

/// Writes every statement into one self-contained SQL script.
pub struct ScriptSink {
    path: PathBuf,
    table: String,
    dialect: Dialect,
    options: ScriptOptions,
}

impl ScriptSink {
    pub fn new(path: impl Into<PathBuf>, table: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
            dialect,
            options: ScriptOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScriptOptions) -> Self {
        self.options = options;
        self
    }
}

impl StatementSink for ScriptSink {
    fn write(&self, statements: &[GeneratedStatement]) -> Result<SinkSummary> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let script = render_script(&self.table, statements, self.dialect.sql(), &self.options);
        std::fs::write(&self.path, &script)
            .with_context(|| format!("Failed to write SQL script: {}", self.path.display()))?;

        info!(
            "Wrote {} statements to {} ({} bytes)",
            statements.len(),
            self.path.display(),
            script.len()
        );

        Ok(SinkSummary {
            statements: statements.len(),
            files: vec![self.path.clone()],
        })
    }
}
