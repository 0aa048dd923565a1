//! CSV sector export reader.
//!
//! This module reads a `;`-delimited sector export, validates and normalizes
//! every row, and turns the valid ones into INSERT statements. Row-level
//! problems never abort a run; they are collected as audit entries for the
//! end-of-run report.

mod transform;

pub use transform::{transform_file, transform_reader, Config, RecordTransformer, TransformOutput};

// Re-export record types for convenience
pub use sector_core::{AuditEntry, AuditKind, GeneratedStatement};
