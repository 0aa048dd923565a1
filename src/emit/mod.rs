//! Generation commands.
//!
//! Every command follows the same three steps: load the resume checkpoint,
//! transform the export, hand the statements to a sink and print the
//! [`RunReport`](crate::report::RunReport).

mod batches;
mod manifest;
mod script;

pub use batches::{run_batches, BatchesArgs};
pub use manifest::{run_manifest, ManifestArgs};
pub use script::{run_script, ScriptArgs};

use crate::report::RunReport;
use crate::CommonArgs;
use anyhow::Context;
use checkpoint::CheckpointFile;
use sector_core::{AuditEntry, RecordError};
use sector_csv_source::{transform_file, TransformOutput};
use sql_sink::{read_manifest, SinkSummary, StatementSink};
use std::path::Path;
use tracing::info;

fn load_checkpoint(common: &CommonArgs) -> anyhow::Result<CheckpointFile> {
    let checkpoint = common.load_checkpoint()?;
    if !checkpoint.is_empty() {
        info!(
            "Skipping {} ids already applied to {}",
            checkpoint.len(),
            checkpoint.table
        );
    }
    Ok(checkpoint)
}

/// Transform the export at `input`, skipping checkpointed ids.
fn transform(
    common: &CommonArgs,
    input: &Path,
) -> anyhow::Result<(CheckpointFile, TransformOutput)> {
    let checkpoint = load_checkpoint(common)?;
    let config = common.config(&checkpoint);
    let output = transform_file(&config, input)?;
    Ok((checkpoint, output))
}

/// Take statements from a manifest written by the `manifest` command.
///
/// Entries whose id is checkpointed are skipped. Audit line numbers are the
/// 1-based positions of the entries in the manifest.
fn from_manifest(
    common: &CommonArgs,
    manifest: &Path,
) -> anyhow::Result<(CheckpointFile, TransformOutput)> {
    let checkpoint = load_checkpoint(common)?;
    let entries = read_manifest(manifest)
        .with_context(|| format!("Failed to read manifest: {}", manifest.display()))?;
    info!(
        "Loaded {} statements from manifest {}",
        entries.len(),
        manifest.display()
    );

    let mut output = TransformOutput::default();
    for (position, entry) in (1u64..).zip(entries) {
        output.rows_read += 1;
        if checkpoint.is_applied(entry.id) {
            let id = entry.id.to_string();
            output.audit.push(AuditEntry::skipped(
                position,
                Some(&id),
                &RecordError::AlreadyApplied(entry.id),
            ));
        } else {
            output.statements.push(entry);
        }
    }
    Ok((checkpoint, output))
}

/// Write the statements and print the run report.
fn deliver(
    input: &Path,
    output: &TransformOutput,
    sink: &dyn StatementSink,
) -> anyhow::Result<SinkSummary> {
    let summary = sink.write(&output.statements)?;

    print!(
        "{}",
        RunReport {
            input,
            output,
            summary: &summary,
        }
    );

    Ok(summary)
}
