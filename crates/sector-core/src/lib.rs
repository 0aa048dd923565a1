//! Core types for the sector-sync framework.
//!
//! This crate provides the foundational types shared by the reader, the SQL
//! renderer and the output sinks:
//!
//! - [`Column`] - The fixed set of input columns, in INSERT order
//! - [`RawRow`] - One input row as column → raw string
//! - [`SectorRecord`] - A validated, normalized sector row
//! - [`SqlValue`] - Rendering-neutral field value
//! - [`AuditEntry`] - Skip/correction entries for the end-of-run report
//! - [`GeneratedStatement`] - A rendered INSERT with the fields that identify it
//!
//! # Architecture
//!
//! ```text
//! sector-core (this crate)
//!    │
//!    ├─── sql-types          (renders SqlValue / SectorRecord as SQL text)
//!    ├─── sector-csv-source  (builds RawRow from CSV, produces statements)
//!    └─── sql-sink           (batches and writes generated statements)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sector_core::{Column, RawRow, SectorRecord, SqlValue};
//!
//! let mut row = RawRow::new();
//! row.insert(Column::Id, "10");
//! row.insert(Column::Name, "Setor A");
//! row.insert(Column::Longitude, "46.6");
//!
//! let parsed = SectorRecord::parse(&row).unwrap();
//! assert_eq!(parsed.record.id, 10);
//! assert_eq!(parsed.record.value(Column::Longitude), SqlValue::Float(-46.6));
//! assert_eq!(parsed.corrections.len(), 1);
//! ```

pub mod audit;
pub mod column;
pub mod error;
pub mod record;
pub mod statement;
pub mod values;

pub use audit::{AuditEntry, AuditKind};
pub use column::{Column, ColumnKind, TIMESTAMP_FORMAT};
pub use error::RecordError;
pub use record::{Correction, ParsedRecord, RawRow, SectorRecord};
pub use statement::GeneratedStatement;
pub use values::SqlValue;
