//! Error types for the interaction service.

use mnemo_embed::EmbeddingError;
use mnemo_memory::MemoryError;

/// Errors surfaced by the interaction service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request carried no query text.
    #[error("no query provided")]
    EmptyQuery,
    /// The embedding collaborator failed.
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
    /// The memory engine failed.
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
}
