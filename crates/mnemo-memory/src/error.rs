//! Error types for record stores and the memory engine.

/// Errors returned by record store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error while appending or scanning records.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error for a persisted record.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors returned by the memory engine.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Malformed arguments, rejected before any store I/O.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Record store read or write failure.
    #[error("persistence error: {0}")]
    Store(#[from] StoreError),
    /// Retrieval exceeded its configured deadline.
    #[error("retrieval timed out after {elapsed_ms}ms")]
    Timeout {
        /// Milliseconds elapsed when the deadline was hit.
        elapsed_ms: u64,
    },
}
