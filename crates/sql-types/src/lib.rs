//! SQL rendering for sector-core types.
//!
//! This crate turns validated records into SQL text. Nothing here touches a
//! database: the output is plain strings for a sink to write.
//!
//! # Modules
//!
//! - [`dialect`] - Target-specific syntax (timestamps, transactional blocks)
//! - [`render`] - Literal escaping and INSERT rendering
//! - [`script`] - Whole-script and per-batch SQL units
//!
//! # Example
//!
//! ```rust
//! use sector_core::{Column, RawRow, SectorRecord};
//! use sql_types::{render_insert, Dialect};
//!
//! let row: RawRow = [(Column::Id, "10"), (Column::Name, "Setor A's")].into_iter().collect();
//! let record = SectorRecord::parse(&row).unwrap().record;
//! let sql = render_insert("SETORES", &record, Dialect::Oracle.sql());
//! assert!(sql.contains("'Setor A''s'"));
//! ```

pub mod dialect;
mod error;
pub mod render;
pub mod script;

pub use dialect::{Dialect, OracleDialect, PostgreSQLDialect, SqlDialect};
pub use error::SqlTypesError;
pub use render::{escape_literal, quote_literal, render_insert, render_value, validate_table_name};
pub use script::{render_block, render_script, ScriptOptions, SAMPLE_COLUMNS};
