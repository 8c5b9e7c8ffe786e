//! Query orchestration over the embedding provider and memory engine.

use crate::error::ServiceError;
use log::{debug, info};
use mnemo_embed::{EmbeddingProvider, extract_keywords};
use mnemo_memory::{InteractionRecord, MemoryEngine, MemoryError, RecordStore, ScoredRecord};
use std::sync::Arc;

/// Record store trait object used by the service.
pub type DynRecordStore = Arc<dyn RecordStore>;

/// Result of answering one query: the synthesized response plus the
/// related interactions that informed it.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// Synthesized response text.
    pub response: String,
    /// Related past interactions, most similar first.
    pub related: Vec<ScoredRecord>,
}

/// Orchestrates embed -> retrieve -> respond -> record for each query.
///
/// Collaborator failures propagate as typed errors; the service performs
/// no retries of its own.
pub struct InteractionService {
    embedder: Arc<dyn EmbeddingProvider>,
    engine: MemoryEngine<DynRecordStore>,
}

impl InteractionService {
    /// Create a service over an embedding provider and memory engine.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, engine: MemoryEngine<DynRecordStore>) -> Self {
        info!(
            "initialized interaction service (embedding_dim={})",
            embedder.dimension()
        );
        Self { embedder, engine }
    }

    /// Answer one query end to end.
    ///
    /// Extracts keywords, embeds the query, retrieves related past
    /// interactions, synthesizes a response, and records the new
    /// interaction before returning.
    pub async fn handle_query(&self, query: &str) -> Result<QueryOutcome, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::EmptyQuery);
        }

        let keywords = extract_keywords(query);
        let embedding = self.embedder.embed(query).await?;
        let related = self.engine.retrieve_with_defaults(&embedding).await?;
        let response = synthesize_response(query, &related);

        let id = self
            .engine
            .record(query, &response, embedding, Some(keywords), None)
            .await?;
        debug!(
            "handled query (id={}, related={}, query_len={})",
            id,
            related.len(),
            query.len()
        );
        Ok(QueryOutcome { response, related })
    }

    /// All stored records, verbatim. Debugging surface.
    pub async fn list_memory(&self) -> Result<Vec<InteractionRecord>, ServiceError> {
        let records = self.engine.store().scan().await.map_err(MemoryError::from)?;
        Ok(records)
    }
}

/// Template response: echo the query, referencing the closest prior
/// response when one qualified.
fn synthesize_response(query: &str, related: &[ScoredRecord]) -> String {
    match related.first() {
        Some(top) => format!(
            "You asked something similar before (\"{}\"). Previously I said: {}",
            top.record.query, top.record.response
        ),
        None => format!("Default response to your query: {query}"),
    }
}
