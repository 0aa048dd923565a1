//! Error types for SQL rendering.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SqlTypesError {
    /// Table name is not a plain SQL identifier.
    #[error("Invalid table name '{0}': expected letters, digits, '_' or '$', optionally schema-qualified")]
    InvalidTableName(String),

    /// Dialect name not recognised.
    #[error("Unknown SQL dialect '{0}' (expected 'oracle' or 'postgresql')")]
    UnknownDialect(String),
}
