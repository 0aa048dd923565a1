//! CSV-to-SQL record transformation
//!
//! This module handles reading a sector export and converting each row into an
//! INSERT statement, collecting skips and corrections along the way.

use anyhow::{Context, Result};
use sector_core::{
    AuditEntry, Column, GeneratedStatement, RawRow, RecordError, SectorRecord,
};
use sql_types::{render_insert, validate_table_name, Dialect};
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration for a transformation run
#[derive(Clone, Debug)]
pub struct Config {
    /// Target table name
    pub table: String,

    /// CSV delimiter character (default: ';')
    pub delimiter: u8,

    /// SQL dialect used for timestamp literals
    pub dialect: Dialect,

    /// Ids already present in the target; rows with these ids are skipped
    pub applied_ids: BTreeSet<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: "SETORES".to_string(),
            delimiter: b';',
            dialect: Dialect::Oracle,
            applied_ids: BTreeSet::new(),
        }
    }
}

/// Result of a transformation run.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    /// One statement per valid record, in input order
    pub statements: Vec<GeneratedStatement>,

    /// Every skip and correction, in input order
    pub audit: Vec<AuditEntry>,

    /// Data rows seen (header excluded)
    pub rows_read: u64,
}

impl TransformOutput {
    pub fn skipped(&self) -> usize {
        self.audit.iter().filter(|e| e.is_skip()).count()
    }

    pub fn corrected(&self) -> usize {
        self.audit.iter().filter(|e| !e.is_skip()).count()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.statements.iter().map(|s| s.id).collect()
    }
}

/// Turns rows into statements one at a time.
///
/// The transformer only produces values; writing them anywhere is up to the
/// caller.
pub struct RecordTransformer<'a> {
    config: &'a Config,
    seen: HashSet<i64>,
    output: TransformOutput,
}

impl<'a> RecordTransformer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            seen: HashSet::new(),
            output: TransformOutput::default(),
        }
    }

    /// Process one data row starting on input line `line`.
    pub fn push(&mut self, line: u64, row: &RawRow) {
        self.output.rows_read += 1;
        let raw_id = row.value(Column::Id);

        let parsed = match SectorRecord::parse(row) {
            Ok(parsed) => parsed,
            Err(e) => return self.skip(line, raw_id, e),
        };
        let record = parsed.record;

        if !self.seen.insert(record.id) {
            return self.skip(line, raw_id, RecordError::DuplicateId(record.id));
        }
        if self.config.applied_ids.contains(&record.id) {
            return self.skip(line, raw_id, RecordError::AlreadyApplied(record.id));
        }

        for correction in &parsed.corrections {
            info!(
                "Line {line} (id {}): {} {}",
                record.id, correction.column, correction.message
            );
            self.output
                .audit
                .push(AuditEntry::corrected(line, record.id, correction));
        }

        let sql = render_insert(&self.config.table, &record, self.config.dialect.sql());
        debug!("Line {line}: {sql}");

        self.output.statements.push(GeneratedStatement {
            id: record.id,
            code: record.code,
            name: record.name,
            sql,
        });
    }

    /// Record a row the CSV reader could not decode.
    pub fn push_unreadable(&mut self, line: u64, reason: impl Into<String>) {
        self.output.rows_read += 1;
        self.skip(line, None, RecordError::Unreadable(reason.into()));
    }

    pub fn finish(self) -> TransformOutput {
        self.output
    }

    fn skip(&mut self, line: u64, raw_id: Option<&str>, error: RecordError) {
        warn!("Skipping line {line}: {error}");
        self.output
            .audit
            .push(AuditEntry::skipped(line, raw_id, &error));
    }
}

/// Transform CSV data from a reader.
///
/// Only an I/O failure, an unreadable header or an invalid table name is
/// returned as an error; every row-level problem ends up in
/// [`TransformOutput::audit`].
pub fn transform_reader<R: Read>(config: &Config, reader: R) -> Result<TransformOutput> {
    validate_table_name(&config.table)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();

    let columns: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();
    for (header, column) in headers.iter().zip(&columns) {
        if column.is_none() {
            debug!("Ignoring unknown column '{header}'");
        }
    }
    if !columns.contains(&Some(Column::Id)) {
        warn!("Input has no ID column; every row will be skipped");
    }
    debug!("CSV headers/columns: {columns:?}");

    let mut transformer = RecordTransformer::new(config);
    let mut record = csv::StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                let row: RawRow = columns
                    .iter()
                    .zip(record.iter())
                    .filter_map(|(column, value)| column.map(|c| (c, value)))
                    .collect();
                transformer.push(line, &row);
            }
            Ok(false) => break,
            Err(e) if e.is_io_error() => {
                return Err(e).context("Failed to read CSV record");
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                transformer.push_unreadable(line, e.to_string());
            }
        }
    }

    Ok(transformer.finish())
}

/// Read a sector export from disk and transform it.
///
/// A missing or unreadable file is the one fatal input condition.
pub fn transform_file(config: &Config, path: &Path) -> Result<TransformOutput> {
    info!("Processing CSV from: {}", path.display());

    let contents = std::fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let output = transform_reader(config, contents.as_slice())?;

    info!(
        "Processed {} rows from {}: {} statements, {} skipped, {} corrected",
        output.rows_read,
        path.display(),
        output.statements.len(),
        output.skipped(),
        output.corrected()
    );

    Ok(output)
}
