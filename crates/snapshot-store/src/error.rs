use thiserror::Error;

/// Errors that can occur when reading or writing the persisted snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for snapshot store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
