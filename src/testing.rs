//! Test helpers for exercising the sector-sync binary
//!
//! Used by the CLI end-to-end tests under `tests/`.

pub mod cli;
pub mod fixtures;

pub use cli::{assert_cli_failure, assert_cli_success, execute_sector_sync};
pub use fixtures::{write_input, HEADER};
