//! End-of-run summary printed to stdout.

use sector_csv_source::TransformOutput;
use sql_sink::SinkSummary;
use std::fmt;
use std::path::Path;

/// Human-readable summary of one generation run.
///
/// Counts first, then the written files, then every audit entry in input
/// order.
pub struct RunReport<'a> {
    pub input: &'a Path,
    pub output: &'a TransformOutput,
    pub summary: &'a SinkSummary,
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input.display())?;
        writeln!(f, "Rows read: {}", self.output.rows_read)?;
        writeln!(f, "Statements generated: {}", self.output.statements.len())?;
        writeln!(f, "Skipped: {}", self.output.skipped())?;
        writeln!(f, "Corrected: {}", self.output.corrected())?;

        if !self.summary.files.is_empty() {
            writeln!(f, "Files written:")?;
            for file in &self.summary.files {
                writeln!(f, "  {}", file.display())?;
            }
        }

        if self.output.audit.is_empty() {
            writeln!(f, "No problems found.")
        } else {
            writeln!(f, "Problems:")?;
            for entry in &self.output.audit {
                writeln!(f, "  {entry}")?;
            }
            Ok(())
        }
    }
}
