use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint {path} belongs to table '{found}', not '{expected}'")]
    TableMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("malformed checkpoint {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
