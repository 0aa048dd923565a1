//! Output sinks for generated statements.
//!
//! This crate defines the `StatementSink` trait and the file-based sinks that
//! implement it. The transformer never writes anything itself; the CLI picks
//! one or more sinks and hands them the ordered statements.
//!
//! - [`ScriptSink`] - one self-contained `.sql` script
//! - [`BatchDirSink`] - one transactional `.sql` file per fixed-size batch
//! - [`ManifestSink`] - JSON list of `{id, code, name, sql}` for an external
//!   execution tool

mod batch;
mod batch_dir;
mod error;
mod manifest;
mod script;
mod traits;

pub use batch::{partition, Batch, DEFAULT_BATCH_SIZE};
pub use batch_dir::BatchDirSink;
pub use error::SinkError;
pub use manifest::{read_manifest, ManifestSink};
pub use script::ScriptSink;
pub use traits::{SinkSummary, StatementSink};
