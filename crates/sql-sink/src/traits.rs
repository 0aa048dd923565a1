//! StatementSink trait definition.

use anyhow::Result;
use sector_core::GeneratedStatement;
use std::path::PathBuf;

/// What a sink wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinkSummary {
    /// Statements written
    pub statements: usize,
    /// Files created or replaced, in write order
    pub files: Vec<PathBuf>,
}

/// Trait for delivering generated statements somewhere.
///
/// Implementations receive the full ordered statement list of a run. Any
/// execution backend (a file writer, a database runner, a tool bridge) can
/// sit behind this interface without the transformer knowing about it.
pub trait StatementSink {
    /// Write all statements, replacing whatever a previous run left behind.
    fn write(&self, statements: &[GeneratedStatement]) -> Result<SinkSummary>;
}
