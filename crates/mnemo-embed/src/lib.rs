//! Text-analysis collaborators for Mnemo.
//!
//! The memory engine treats embedding generation and tokenization as
//! external concerns; this crate owns those seams. It ships a
//! deterministic feature-hashing embedder for local use — the
//! [`EmbeddingProvider`] trait is the place to plug a real model.

pub mod error;
pub mod provider;
pub mod tokenize;

/// Embedding failure type.
pub use error::EmbeddingError;
/// Embedding provider contract and the hashing implementation.
pub use provider::{DEFAULT_DIMENSION, EmbeddingProvider, HashEmbedder};
/// Keyword extraction from query text.
pub use tokenize::extract_keywords;
