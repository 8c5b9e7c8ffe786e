//! Error types for embedding providers.

/// Errors returned by embedding providers.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    /// Input text was empty or whitespace-only.
    #[error("cannot embed empty input")]
    EmptyInput,
    /// Provider-specific failure.
    #[error("embedding failed: {0}")]
    Failed(String),
}
