//! SectorSync Library
//!
//! Turns a `;`-delimited sector export into SQL that loads it into a
//! relational table.
//!
//! # Features
//!
//! - Validation: rows with a bad identifier or coordinate are skipped and
//!   reported, never silently dropped
//! - Correction: wrong-sign longitudes are negated, unparseable timestamps
//!   become NULL, and both are reported
//! - Multiple outputs: one import script, fixed-size transactional batches,
//!   or a JSON manifest for an external runner
//! - Resume: a checkpoint file lists ids already applied so reruns skip them
//!
//! # Crates
//!
//! - `sector_core` - record model, validation and audit entries
//! - `sql_types` - dialects and SQL literal rendering
//! - `sector_csv_source` - CSV reading and row transformation
//! - `sql_sink` - batching and file sinks
//! - `checkpoint` - resume state
//!
//! # CLI Usage
//!
//! ```bash
//! # One script with DELETE, inserts, COMMIT and verification queries
//! sector-sync script --input setores.csv --output import_setores.sql
//!
//! # Batches of 10 inserts, one file each
//! sector-sync batches --input setores.csv --output-dir lotes/
//!
//! # Record ids 1..5 as applied, then regenerate without them
//! sector-sync checkpoint mark --checkpoint-file applied.json --ids 1,2,3,4,5
//! sector-sync batches --input setores.csv --output-dir lotes/ --checkpoint-file applied.json
//!
//! # Two stages: manifest first, batches from the manifest later
//! sector-sync manifest --input setores.csv --output comandos.json
//! sector-sync batches --from-manifest comandos.json --output-dir lotes/
//! ```

use anyhow::Context;
use checkpoint::{CheckpointFile, CheckpointStore, FilesystemStore, NullStore};
use clap::Parser;
use std::path::PathBuf;

pub mod emit;
pub mod report;
pub mod resume;
pub mod testing;

// Re-export the CSV source crate for convenience
pub use sector_csv_source as csv;

/// Default target table.
pub const DEFAULT_TABLE: &str = "SETORES";

/// Options shared by every generation command.
#[derive(Parser, Clone, Debug)]
pub struct CommonArgs {
    /// Target table name
    #[arg(long, default_value = DEFAULT_TABLE, env = "SECTOR_SYNC_TABLE")]
    pub table: String,

    /// SQL dialect of the generated statements (oracle, postgresql)
    #[arg(long, default_value = "oracle", env = "SECTOR_SYNC_DIALECT")]
    pub dialect: sql_types::Dialect,

    /// Field delimiter (a single ASCII character, or "tab")
    #[arg(long, default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Checkpoint file listing ids already applied; those rows are skipped
    #[arg(long, value_name = "FILE")]
    pub checkpoint_file: Option<PathBuf>,
}

impl CommonArgs {
    /// Storage backend for `--checkpoint-file`, or a no-op store without one.
    pub fn checkpoint_store(&self) -> Box<dyn CheckpointStore> {
        match &self.checkpoint_file {
            Some(path) => Box::new(FilesystemStore::new(path)),
            None => Box::new(NullStore),
        }
    }

    pub fn load_checkpoint(&self) -> anyhow::Result<CheckpointFile> {
        self.checkpoint_store()
            .load(&self.table)
            .context("Failed to load checkpoint")
    }

    /// Transformer configuration for these options.
    pub fn config(&self, checkpoint: &CheckpointFile) -> csv::Config {
        csv::Config {
            table: self.table.clone(),
            delimiter: self.delimiter,
            dialect: self.dialect,
            applied_ids: checkpoint.applied_ids.clone(),
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!(
                "delimiter must be a single ASCII character, got '{s}'"
            )),
        },
    }
}
