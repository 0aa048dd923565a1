//! Fixed-size batching of generated statements.

use crate::SinkError;
use sector_core::GeneratedStatement;
use sql_types::{render_block, SqlDialect};

/// Default number of statements per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// A contiguous chunk of statements emitted inside one transaction.
///
/// `ordinal`, `start` and `end` are 1-based; `start..=end` is the range of
/// record positions the batch covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    pub ordinal: usize,
    pub total: usize,
    pub start: usize,
    pub end: usize,
    pub statements: &'a [GeneratedStatement],
}

impl Batch<'_> {
    pub fn label(&self) -> String {
        format!(
            "Batch {}/{} - records {} to {}",
            self.ordinal, self.total, self.start, self.end
        )
    }

    pub fn file_name(&self) -> String {
        format!("batch_{:03}.sql", self.ordinal)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.statements.iter().map(|s| s.id).collect()
    }

    /// Render the batch as a transactional block.
    pub fn render(&self, dialect: &dyn SqlDialect) -> String {
        render_block(&self.label(), self.statements, dialect)
    }
}

/// Split statements into batches of `size`; the last batch holds the remainder.
pub fn partition(
    statements: &[GeneratedStatement],
    size: usize,
) -> Result<Vec<Batch<'_>>, SinkError> {
    if size == 0 {
        return Err(SinkError::InvalidBatchSize(size));
    }

    let total = statements.len().div_ceil(size);
    Ok(statements
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| Batch {
            ordinal: i + 1,
            total,
            start: i * size + 1,
            end: i * size + chunk.len(),
            statements: chunk,
        })
        .collect())
}
