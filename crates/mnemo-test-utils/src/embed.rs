use async_trait::async_trait;
use mnemo_embed::{EmbeddingError, EmbeddingProvider};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Embedding provider returning canned vectors per input text.
///
/// Unknown inputs fall back to a zero vector of the configured
/// dimension, keeping tests deterministic without a model.
pub struct StubEmbedder {
    dimension: usize,
    canned: Mutex<HashMap<String, Vec<f32>>>,
}

impl StubEmbedder {
    /// Create a stub with the given output dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            canned: Mutex::new(HashMap::new()),
        }
    }

    /// Register the vector to return for a given input.
    pub fn with_vector(self, text: &str, vector: Vec<f32>) -> Self {
        self.canned.lock().insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }
        Ok(self
            .canned
            .lock()
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dimension]))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
