//! Error types for the sinks.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    /// Batch size must be at least one.
    #[error("Invalid batch size {0}: must be at least 1")]
    InvalidBatchSize(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest (de)serialization error.
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
