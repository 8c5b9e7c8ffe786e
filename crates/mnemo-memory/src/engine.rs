//! Retrieval engine over an append-only record store.

use crate::error::MemoryError;
use crate::model::{DEFAULT_INTERACTION_TYPE, InteractionRecord};
use crate::similarity::cosine_similarity;
use crate::store::RecordStore;
use chrono::Utc;
use log::{debug, info, warn};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Retrieval defaults and limits for a [`MemoryEngine`].
#[derive(Debug, Clone, Copy)]
pub struct RetrievalConfig {
    /// Maximum number of results to return.
    pub k: usize,
    /// Minimum similarity (exclusive) for a record to qualify.
    pub threshold: f32,
    /// Optional bound on scan time; exceeding it fails with `Timeout`.
    pub deadline: Option<Duration>,
}

impl Default for RetrievalConfig {
    /// Default retrieval settings: top 5 above similarity 0.8, no deadline.
    fn default() -> Self {
        Self {
            k: 5,
            threshold: 0.8,
            deadline: None,
        }
    }
}

/// A stored record paired with its similarity to a query embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    /// The matching record.
    pub record: InteractionRecord,
    /// Cosine similarity to the query embedding.
    pub similarity: f32,
}

/// Engine logging interactions and retrieving semantically related ones.
///
/// `record` appends exactly one record per call; `retrieve` takes a fresh
/// full scan per call (O(N*D), by design — the contract is the seam for
/// swapping in an index at larger scale).
#[derive(Debug)]
pub struct MemoryEngine<S> {
    store: S,
    config: RetrievalConfig,
}

impl<S: RecordStore> MemoryEngine<S> {
    /// Create an engine with default retrieval settings.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RetrievalConfig::default())
    }

    /// Create an engine with explicit retrieval settings.
    pub fn with_config(store: S, config: RetrievalConfig) -> Self {
        info!(
            "initialized memory engine (k={}, threshold={})",
            config.k, config.threshold
        );
        Self { store, config }
    }

    /// The underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The engine's retrieval defaults.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Log one interaction, returning the new record's identifier.
    ///
    /// Rejects empty query/response text and empty or non-finite
    /// embeddings before any store I/O. Append failures surface as
    /// [`MemoryError::Store`]; they are never converted into success.
    pub async fn record(
        &self,
        query: &str,
        response: &str,
        embedding: Vec<f32>,
        keywords: Option<Vec<String>>,
        interaction_type: Option<&str>,
    ) -> Result<Uuid, MemoryError> {
        if query.trim().is_empty() {
            return Err(MemoryError::InvalidInput("query must be non-empty".into()));
        }
        if response.trim().is_empty() {
            return Err(MemoryError::InvalidInput(
                "response must be non-empty".into(),
            ));
        }
        validate_embedding(&embedding)?;

        let record = InteractionRecord {
            id: Uuid::new_v4(),
            query: query.to_string(),
            response: response.to_string(),
            embedding,
            keywords,
            timestamp: Utc::now(),
            interaction_type: interaction_type
                .unwrap_or(DEFAULT_INTERACTION_TYPE)
                .to_string(),
        };
        let id = self.store.append(&record).await?;
        debug!(
            "recorded interaction (id={}, query_len={}, type={})",
            id,
            record.query.len(),
            record.interaction_type
        );
        Ok(id)
    }

    /// Retrieve up to `k` records with similarity strictly above
    /// `threshold`, most similar first.
    ///
    /// Records whose embedding length differs from the query embedding's
    /// are skipped rather than scored. Ties are broken by earlier
    /// timestamp, so results are deterministic for a fixed store
    /// snapshot. A store read failure surfaces as [`MemoryError::Store`];
    /// an empty result is only ever a successful "no matches".
    pub async fn retrieve(
        &self,
        embedding: &[f32],
        k: usize,
        threshold: f32,
    ) -> Result<Vec<ScoredRecord>, MemoryError> {
        if k < 1 {
            return Err(MemoryError::InvalidInput("k must be at least 1".into()));
        }
        if !(-1.0..=1.0).contains(&threshold) {
            return Err(MemoryError::InvalidInput(format!(
                "threshold must be in [-1, 1], got {threshold}"
            )));
        }
        validate_embedding(embedding)?;

        let start = Instant::now();
        let records = self.store.scan().await?;
        let scanned = records.len();

        let mut matches = Vec::new();
        for record in records {
            if let Some(deadline) = self.config.deadline
                && start.elapsed() > deadline
            {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                warn!(
                    "retrieval deadline exceeded (elapsed_ms={}, scanned={})",
                    elapsed_ms, scanned
                );
                return Err(MemoryError::Timeout { elapsed_ms });
            }
            if record.embedding.len() != embedding.len() {
                warn!(
                    "skipping record with mismatched embedding (id={}, len={}, expected={})",
                    record.id,
                    record.embedding.len(),
                    embedding.len()
                );
                continue;
            }
            let similarity = cosine_similarity(embedding, &record.embedding);
            if similarity > threshold {
                matches.push(ScoredRecord { record, similarity });
            }
        }

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.record.timestamp.cmp(&b.record.timestamp))
        });
        matches.truncate(k);
        debug!(
            "retrieved memories (scanned={}, matched={}, threshold={})",
            scanned,
            matches.len(),
            threshold
        );
        Ok(matches)
    }

    /// Retrieve using the engine's configured `k` and threshold.
    pub async fn retrieve_with_defaults(
        &self,
        embedding: &[f32],
    ) -> Result<Vec<ScoredRecord>, MemoryError> {
        self.retrieve(embedding, self.config.k, self.config.threshold)
            .await
    }
}

/// Reject empty or non-finite embeddings.
fn validate_embedding(embedding: &[f32]) -> Result<(), MemoryError> {
    if embedding.is_empty() {
        return Err(MemoryError::InvalidInput(
            "embedding must be non-empty".into(),
        ));
    }
    if embedding.iter().any(|value| !value.is_finite()) {
        return Err(MemoryError::InvalidInput(
            "embedding must contain only finite values".into(),
        ));
    }
    Ok(())
}
