//! Embedding provider contract and the feature-hashing implementation.

use crate::error::EmbeddingError;
use async_trait::async_trait;
use log::{debug, info};

/// Default output dimension for the hashing embedder.
pub const DEFAULT_DIMENSION: usize = 64;

#[async_trait]
/// Maps text to a fixed-dimension vector.
///
/// A provider's output dimension is constant for its lifetime, and the
/// same input always produces the same vector.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Output dimension of this provider.
    fn dimension(&self) -> usize;
}

/// Deterministic feature-hashing embedder.
///
/// Hashes lowercased alphanumeric tokens into a fixed number of buckets
/// (FNV-1a) and L2-normalizes the result. Not a semantic model — it is a
/// stand-in that keeps the whole pipeline runnable without model
/// downloads, and it satisfies the provider contract exactly.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create an embedder with the given output dimension.
    pub fn new(dimension: usize) -> Self {
        info!("initialized hash embedder (dimension={dimension})");
        Self { dimension }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut vector = vec![0.0f32; self.dimension];
        let mut tokens = 0usize;
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            let bucket = fnv1a(&token.to_lowercase()) as usize % self.dimension;
            vector[bucket] += 1.0;
            tokens += 1;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        debug!(
            "embedded text (tokens={}, dimension={})",
            tokens, self.dimension
        );
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// 64-bit FNV-1a hash.
fn fnv1a(token: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for byte in token.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::{EmbeddingProvider, HashEmbedder};
    use crate::error::EmbeddingError;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn embedding_is_deterministic() {
        let embedder = HashEmbedder::new(32);
        let first = embedder.embed("what is rust").await.expect("embed");
        let second = embedder.embed("what is rust").await.expect("embed");
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
    }

    #[tokio::test]
    async fn embedding_is_unit_length() {
        let embedder = HashEmbedder::default();
        let vector = embedder.embed("hello embedding world").await.expect("embed");
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn case_is_ignored() {
        let embedder = HashEmbedder::new(16);
        let lower = embedder.embed("hello world").await.expect("embed");
        let upper = embedder.embed("HELLO WORLD").await.expect("embed");
        assert_eq!(lower, upper);
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let embedder = HashEmbedder::default();
        assert!(matches!(
            embedder.embed("").await,
            Err(EmbeddingError::EmptyInput)
        ));
        assert!(matches!(
            embedder.embed("   \t").await,
            Err(EmbeddingError::EmptyInput)
        ));
    }

    #[tokio::test]
    async fn different_texts_usually_differ() {
        let embedder = HashEmbedder::default();
        let a = embedder.embed("rust borrow checker").await.expect("embed");
        let b = embedder.embed("gardening tips").await.expect("embed");
        assert_ne!(a, b);
    }
}
