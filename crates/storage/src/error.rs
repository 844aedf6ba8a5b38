use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to prepare storage directory `{0}`: {1}")]
    DirectoryError(PathBuf, #[source] std::io::Error),

    #[error("Failed to access storage key `{0}`: {1}")]
    IoError(String, #[source] std::io::Error),

    #[error("Storage key `{0}` is not a valid key name")]
    InvalidKey(String),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    JsonError(#[from] serde_json::Error),
}
