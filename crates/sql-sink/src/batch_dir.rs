//! Batch-directory sink: one transactional SQL file per batch.

use crate::{partition, SinkSummary, StatementSink, DEFAULT_BATCH_SIZE};
use anyhow::{Context, Result};
use sector_core::GeneratedStatement;
use sql_types::Dialect;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes `batch_001.sql`, `batch_002.sql`, ... into a directory.
pub struct BatchDirSink {
    dir: PathBuf,
    dialect: Dialect,
    batch_size: usize,
}

impl BatchDirSink {
    pub fn new(dir: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            dir: dir.into(),
            dialect,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Whether `file_name` has the `batch_NNN.sql` shape written by this sink.
fn is_batch_file_name(file_name: &str) -> bool {
    file_name
        .strip_prefix("batch_")
        .and_then(|rest| rest.strip_suffix(".sql"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Remove `batch_NNN.sql` files left by a previous run.
fn remove_stale_batches(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_batch_file_name(&file_name) && entry.path().is_file() {
            std::fs::remove_file(entry.path())
                .with_context(|| format!("Failed to remove stale batch: {file_name}"))?;
            removed += 1;
        }
    }
    Ok(removed)
}

impl StatementSink for BatchDirSink {
    fn write(&self, statements: &[GeneratedStatement]) -> Result<SinkSummary> {
        let batches = partition(statements, self.batch_size)?;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;
        let removed = remove_stale_batches(&self.dir)?;
        if removed > 0 {
            debug!("Removed {removed} stale batch files from {}", self.dir.display());
        }

        info!(
            "Writing {} batches of up to {} statements to {}",
            batches.len(),
            self.batch_size,
            self.dir.display()
        );

        let mut files = Vec::with_capacity(batches.len());
        for batch in &batches {
            let path = self.dir.join(batch.file_name());
            let text = batch.render(self.dialect.sql());
            std::fs::write(&path, &text)
                .with_context(|| format!("Failed to write batch file: {}", path.display()))?;
            info!("{}: {} ({} bytes)", batch.label(), path.display(), text.len());
            files.push(path);
        }

        Ok(SinkSummary {
            statements: statements.len(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn statements(n: i64) -> Vec<GeneratedStatement> {
        (1..=n)
            .map(|id| GeneratedStatement {
                id,
                code: None,
                name: None,
                sql: format!("INSERT INTO SETORES (ID) VALUES ({id})"),
            })
            .collect()
    }

    #[test]
    fn test_writes_one_file_per_batch() {
        let temp_dir = TempDir::new().unwrap();
        let sink = BatchDirSink::new(temp_dir.path(), Dialect::Oracle).with_batch_size(4);

        let summary = sink.write(&statements(10)).unwrap();

        assert_eq!(summary.statements, 10);
        assert_eq!(summary.files.len(), 3);
        let last = std::fs::read_to_string(temp_dir.path().join("batch_003.sql")).unwrap();
        assert!(last.starts_with("-- Batch 3/3 - records 9 to 10\n"));
        assert_eq!(last.matches("INSERT INTO").count(), 2);
    }

    #[test]
    fn test_stale_batches_are_replaced() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("batch_007.sql"), "old").unwrap();
        std::fs::write(temp_dir.path().join("batch_1234.sql"), "old").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "keep").unwrap();
        std::fs::write(temp_dir.path().join("batch_notes.sql"), "keep").unwrap();

        BatchDirSink::new(temp_dir.path(), Dialect::PostgreSQL)
            .write(&statements(3))
            .unwrap();

        assert!(!temp_dir.path().join("batch_007.sql").exists());
        assert!(!temp_dir.path().join("batch_1234.sql").exists());
        assert!(temp_dir.path().join("batch_001.sql").exists());
        assert!(temp_dir.path().join("notes.txt").exists());
        assert!(temp_dir.path().join("batch_notes.sql").exists());
    }

    #[test]
    fn test_batch_file_name_shape() {
        assert!(is_batch_file_name("batch_001.sql"));
        assert!(is_batch_file_name("batch_1000.sql"));
        assert!(!is_batch_file_name("batch_notes.sql"));
        assert!(!is_batch_file_name("batch_.sql"));
        assert!(!is_batch_file_name("batch_001.sql.bak"));
        assert!(!is_batch_file_name("lote_001.sql"));
    }

    #[test]
    fn test_zero_batch_size_fails_before_touching_disk() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("batches");
        let result = BatchDirSink::new(&out, Dialect::Oracle)
            .with_batch_size(0)
            .write(&statements(3));

        assert!(result.is_err());
        assert!(!out.exists());
    }
}
