//! Skip and correction entries collected during a run.

use crate::{Column, Correction, RecordError};
use serde::Serialize;
use std::fmt;

/// Whether a row was dropped or kept with a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    Skipped,
    Corrected,
}

/// One entry of the end-of-run report.
///
/// `line` is the 1-based line of the input file the row started on, so the
/// header is line 1 and the first data row is line 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub line: u64,
    /// Id text as read, when the row had one
    pub id: Option<String>,
    pub column: Option<Column>,
    pub kind: AuditKind,
    pub message: String,
}

impl AuditEntry {
    pub fn skipped(line: u64, id: Option<&str>, error: &RecordError) -> Self {
        Self {
            line,
            id: id.map(str::to_string),
            column: error.column(),
            kind: AuditKind::Skipped,
            message: error.to_string(),
        }
    }

    pub fn corrected(line: u64, id: i64, correction: &Correction) -> Self {
        Self {
            line,
            id: Some(id.to_string()),
            column: Some(correction.column),
            kind: AuditKind::Corrected,
            message: correction.message.clone(),
        }
    }

    pub fn is_skip(&self) -> bool {
        self.kind == AuditKind::Skipped
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            AuditKind::Skipped => "skipped",
            AuditKind::Corrected => "corrected",
        };
        write!(f, "line {}", self.line)?;
        if let Some(id) = &self.id {
            write!(f, " (id {id})")?;
        }
        write!(f, " {kind}")?;
        if let Some(column) = self.column {
            write!(f, " [{column}]")?;
        }
        write!(f, ": {}", self.message)
    }
}
