use crate::CommonArgs;
use checkpoint::CheckpointFile;
use clap::Parser;
use sector_csv_source::TransformOutput;
use sql_sink::{ScriptSink, SinkSummary};
use sql_types::ScriptOptions;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
pub struct ScriptArgs {
    /// Sector export to read
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Script file to write
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Do not emit `DELETE FROM <table>` before the inserts (required with a
    /// non-empty checkpoint)
    #[arg(long)]
    pub keep_existing: bool,

    /// Rows shown by the verification sample query
    #[arg(long, default_value = "10")]
    pub sample_rows: usize,
}

/// Header comment lines describing what the run left out or changed.
fn script_notes(checkpoint: &CheckpointFile, output: &TransformOutput) -> Vec<String> {
    let mut notes = Vec::new();
    if !checkpoint.is_empty() {
        notes.push(format!(
            "{} ids already applied were left out",
            checkpoint.len()
        ));
    }
    let (skipped, corrected) = (output.skipped(), output.corrected());
    if skipped > 0 || corrected > 0 {
        notes.push(format!(
            "{skipped} rows skipped, {corrected} values corrected (see the run report)"
        ));
    }
    notes
}

/// Generate one self-contained import script.
///
/// Fails before writing when the table would be cleared while checkpointed
/// ids are left out of the script.
pub fn run_script(args: ScriptArgs) -> anyhow::Result<SinkSummary> {
    let (checkpoint, output) = super::transform(&args.common, &args.input)?;

    let clear_existing = !args.keep_existing;
    if clear_existing && !checkpoint.is_empty() {
        anyhow::bail!(
            "Refusing to clear {} while {} checkpointed ids are left out of the script; \
             pass --keep-existing to preserve them",
            args.common.table,
            checkpoint.len()
        );
    }

    let options = ScriptOptions {
        clear_existing,
        sample_rows: args.sample_rows,
        source_name: Some(args.input.display().to_string()),
        notes: script_notes(&checkpoint, &output),
    };
    let sink = ScriptSink::new(&args.output, &args.common.table, args.common.dialect)
        .with_options(options);

    super::deliver(&args.input, &output, &sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sector_core::{AuditEntry, RecordError};

    #[test]
    fn test_script_notes() {
        let mut checkpoint = CheckpointFile::new("SETORES");
        let mut output = TransformOutput::default();
        assert!(script_notes(&checkpoint, &output).is_empty());

        checkpoint.mark_applied([1, 2]);
        output
            .audit
            .push(AuditEntry::skipped(2, None, &RecordError::MissingId));

        assert_eq!(
            script_notes(&checkpoint, &output),
            vec![
                "2 ids already applied were left out".to_string(),
                "1 rows skipped, 0 values corrected (see the run report)".to_string(),
            ]
        );
    }
}
