//! Checkpoint commands
//!
//! Inspect a resume checkpoint, or record ids as applied once a batch or
//! manifest entry has been executed against the target table.

use anyhow::{Context, Result};
use checkpoint::{CheckpointStore, FilesystemStore};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::DEFAULT_TABLE;

#[derive(Subcommand, Clone, Debug)]
pub enum CheckpointCommand {
    /// Show the ids recorded in a checkpoint file
    Show {
        /// Checkpoint file to read
        #[arg(long, value_name = "FILE")]
        checkpoint_file: PathBuf,
    },

    /// Record ids as applied to the target table
    Mark(MarkArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct MarkArgs {
    /// Checkpoint file to update (created if missing)
    #[arg(long, value_name = "FILE")]
    pub checkpoint_file: PathBuf,

    /// Target table the ids were applied to
    #[arg(long, default_value = DEFAULT_TABLE, env = "SECTOR_SYNC_TABLE")]
    pub table: String,

    /// Comma-separated ids (e.g. 1,2,3)
    #[arg(
        long,
        value_delimiter = ',',
        required_unless_present = "from_manifest",
        conflicts_with = "from_manifest"
    )]
    pub ids: Vec<i64>,

    /// Take every id listed in a manifest written by `sector-sync manifest`
    #[arg(long, value_name = "FILE")]
    pub from_manifest: Option<PathBuf>,
}

pub fn run_checkpoint(command: CheckpointCommand) -> Result<()> {
    match command {
        CheckpointCommand::Show { checkpoint_file } => run_show(checkpoint_file),
        CheckpointCommand::Mark(args) => run_mark(args),
    }
}

fn run_show(checkpoint_file: PathBuf) -> Result<()> {
    let store = FilesystemStore::new(&checkpoint_file);
    match store.read()? {
        None => println!("No checkpoint at {}", checkpoint_file.display()),
        Some(checkpoint) => {
            println!("Checkpoint: {}", checkpoint_file.display());
            println!("Table: {}", checkpoint.table);
            println!("Updated at: {}", checkpoint.updated_at.to_rfc3339());
            println!(
                "Applied ids ({}): {}",
                checkpoint.len(),
                format_id_ranges(&checkpoint.applied_ids)
            );
        }
    }
    Ok(())
}

fn run_mark(args: MarkArgs) -> Result<()> {
    let ids = match &args.from_manifest {
        Some(path) => sql_sink::read_manifest(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?
            .into_iter()
            .map(|s| s.id)
            .collect(),
        None => args.ids,
    };

    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        anyhow::bail!("Invalid id {bad}: ids must be positive integers");
    }

    let store = FilesystemStore::new(&args.checkpoint_file);
    let mut checkpoint = store.load(&args.table)?;
    let added = checkpoint.mark_applied(ids);
    store.save(&checkpoint)?;

    println!(
        "Marked {added} new ids as applied to {} ({} total)",
        checkpoint.table,
        checkpoint.len()
    );
    Ok(())
}

/// Collapse consecutive ids into ranges: `1-5, 9, 11-12`.
fn format_id_ranges(ids: &BTreeSet<i64>) -> String {
    let mut ranges: Vec<(i64, i64)> = Vec::new();
    for &id in ids {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == id => *end = id,
            _ => ranges.push((id, id)),
        }
    }

    if ranges.is_empty() {
        return "none".to_string();
    }

    ranges
        .iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
