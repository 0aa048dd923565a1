//! Per-row validation errors.

use crate::Column;
use thiserror::Error;

/// Reasons a row is excluded from the output.
///
/// None of these abort a run; the transformer turns each into a skip entry
/// of the end-of-run report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// ID cell missing or blank.
    #[error("missing id")]
    MissingId,

    /// ID is not a positive integer.
    #[error("invalid id '{0}': expected a positive integer")]
    InvalidId(String),

    /// A numeric column that is present but not a finite number.
    #[error("invalid {column} value '{value}': expected a number")]
    InvalidNumber { column: Column, value: String },

    /// ATIVO is present but not a recognised flag.
    #[error("invalid {column} value '{value}': expected a flag (0/1, true/false, s/n)")]
    InvalidFlag { column: Column, value: String },

    /// The same id appeared earlier in the input.
    #[error("duplicate id {0}")]
    DuplicateId(i64),

    /// The id is listed in the resume checkpoint.
    #[error("id {0} already applied")]
    AlreadyApplied(i64),

    /// The CSV record itself could not be decoded.
    #[error("unreadable row: {0}")]
    Unreadable(String),
}

impl RecordError {
    /// Column the error refers to, if any.
    pub fn column(&self) -> Option<Column> {
        match self {
            RecordError::MissingId
            | RecordError::InvalidId(_)
            | RecordError::DuplicateId(_)
            | RecordError::AlreadyApplied(_) => Some(Column::Id),
            RecordError::InvalidNumber { column, .. } | RecordError::InvalidFlag { column, .. } => {
                Some(*column)
            }
            RecordError::Unreadable(_) => None,
        }
    }
}
