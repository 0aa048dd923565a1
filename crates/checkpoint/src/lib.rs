//! Resume state for sector-sync
//!
//! Records which sector ids have already been applied to a target table so a
//! later run can skip them instead of generating duplicate inserts.
//!
//! # Architecture
//!
//! - `CheckpointFile` - the persisted state: table name, applied ids and the
//!   time of the last update
//! - `CheckpointStore` - storage backend trait with `load` and `save`
//!
//! ## Storage Backends
//!
//! - `FilesystemStore` - one pretty-printed JSON file; a missing file is an
//!   empty state
//! - `NullStore` - never persists anything; used when no checkpoint file is
//!   configured
//!
//! # Example
//!
//! ```rust
//! use checkpoint::{CheckpointFile, CheckpointStore, FilesystemStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = FilesystemStore::new(dir.path().join("applied.json"));
//!
//! let mut state = store.load("SETORES").unwrap();
//! assert!(state.applied_ids.is_empty());
//!
//! state.mark_applied([1, 2, 3]);
//! store.save(&state).unwrap();
//!
//! let reloaded = store.load("SETORES").unwrap();
//! assert!(reloaded.is_applied(2));
//! ```

mod error;
mod file;
mod filesystem;
pub mod store;


pub use error::CheckpointError;
pub use file::CheckpointFile;
pub use filesystem::FilesystemStore;
pub use store::{CheckpointStore, NullStore};
