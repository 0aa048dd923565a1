//! Target database dialects.
//!
//! The generated statements are plain literal-valued INSERTs; only a handful
//! of constructs differ between targets and those live behind [`SqlDialect`].

use crate::SqlTypesError;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Trait for target-specific SQL syntax.
pub trait SqlDialect {
    /// Short lowercase name used in logs and script headers.
    fn name(&self) -> &'static str;

    /// Render a timestamp literal.
    fn timestamp_literal(&self, ts: &NaiveDateTime) -> String;

    /// Statement opening a whole-script transaction, if the target needs one.
    fn script_begin(&self) -> Option<&'static str>;

    /// Trailing line of a whole script (e.g. to leave an interactive client).
    fn script_footer(&self) -> Option<&'static str>;

    /// Opening line of a transactional batch block.
    fn block_begin(&self) -> &'static str;

    /// A statement as it appears inside a batch block, terminator included.
    fn block_statement(&self, sql: &str) -> String;

    /// Closing lines of a transactional batch block, commit included.
    fn block_end(&self) -> &'static str;

    /// Query returning at most `limit` rows of `columns` from `table`.
    fn sample_rows_query(&self, table: &str, columns: &[&str], limit: usize) -> String;
}

/// Oracle (SQL*Plus / SQLcl) syntax.
pub struct OracleDialect;

impl SqlDialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn timestamp_literal(&self, ts: &NaiveDateTime) -> String {
        format!(
            "TO_TIMESTAMP('{}', 'DD/MM/YYYY HH24:MI')",
            ts.format("%d/%m/%Y %H:%M")
        )
    }

    fn script_begin(&self) -> Option<&'static str> {
        // Oracle opens a transaction implicitly with the first DML statement
        None
    }

    fn script_footer(&self) -> Option<&'static str> {
        Some("EXIT;")
    }

    fn block_begin(&self) -> &'static str {
        "BEGIN"
    }

    fn block_statement(&self, sql: &str) -> String {
        format!("  {sql};")
    }

    fn block_end(&self) -> &'static str {
        "  COMMIT;\nEND;\n/"
    }

    fn sample_rows_query(&self, table: &str, columns: &[&str], limit: usize) -> String {
        format!(
            "SELECT {} FROM {table} WHERE ROWNUM <= {limit};",
            columns.join(", ")
        )
    }
}

/// PostgreSQL (psql) syntax.
pub struct PostgreSQLDialect;

impl SqlDialect for PostgreSQLDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn timestamp_literal(&self, ts: &NaiveDateTime) -> String {
        format!("TIMESTAMP '{}'", ts.format("%Y-%m-%d %H:%M:%S"))
    }

    fn script_begin(&self) -> Option<&'static str> {
        Some("BEGIN;")
    }

    fn script_footer(&self) -> Option<&'static str> {
        None
    }

    fn block_begin(&self) -> &'static str {
        "BEGIN;"
    }

    fn block_statement(&self, sql: &str) -> String {
        format!("{sql};")
    }

    fn block_end(&self) -> &'static str {
        "COMMIT;"
    }

    fn sample_rows_query(&self, table: &str, columns: &[&str], limit: usize) -> String {
        format!(
            "SELECT {} FROM {table} ORDER BY ID LIMIT {limit};",
            columns.join(", ")
        )
    }
}

/// Dialect selector for configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Oracle,
    PostgreSQL,
}

impl Dialect {
    pub fn sql(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Oracle => &OracleDialect,
            Dialect::PostgreSQL => &PostgreSQLDialect,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql().name())
    }
}

impl FromStr for Dialect {
    type Err = SqlTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oracle" => Ok(Dialect::Oracle),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSQL),
            other => Err(SqlTypesError::UnknownDialect(other.to_string())),
        }
    }
}
