//! Literal rendering and INSERT generation.

use crate::{SqlDialect, SqlTypesError};
use sector_core::{Column, SectorRecord, SqlValue};

/// Double every single quote so the text can sit inside a `'...'` literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render text as a single-quoted SQL literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

/// Render a single value.
///
/// Numbers are unquoted, text is quoted and escaped, `Null` is `NULL`.
pub fn render_value(value: &SqlValue, dialect: &dyn SqlDialect) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Float(f) => f.to_string(),
        SqlValue::Text(s) => quote_literal(s),
        SqlValue::Timestamp(ts) => dialect.timestamp_literal(ts),
    }
}

/// Render the INSERT statement for one record, without a terminator.
pub fn render_insert(table: &str, record: &SectorRecord, dialect: &dyn SqlDialect) -> String {
    let (columns, values): (Vec<&str>, Vec<String>) = record
        .values()
        .map(|(column, value)| (column.name(), render_value(&value, dialect)))
        .unzip();

    format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        values.join(", ")
    )
}

/// Check that `name` is a plain, optionally schema-qualified identifier.
///
/// The table name is interpolated into every statement, so anything that
/// could carry SQL is refused up front.
pub fn validate_table_name(name: &str) -> Result<(), SqlTypesError> {
    let is_identifier = |part: &str| {
        let mut chars = part.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            }
            _ => false,
        }
    };

    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() <= 2 && parts.iter().all(|p| is_identifier(p)) {
        Ok(())
    } else {
        Err(SqlTypesError::InvalidTableName(name.to_string()))
    }
}
