//! Embedding-based interaction memory for Mnemo.
//!
//! This crate owns the core engine: the persisted record model, cosine
//! similarity, the record store contract with its JSONL and in-memory
//! implementations, and the retrieval engine on top of them.

pub mod engine;
pub mod error;
pub mod model;
pub mod similarity;
pub mod store;

/// Retrieval engine and its configuration.
pub use engine::{MemoryEngine, RetrievalConfig, ScoredRecord};
/// Engine and store error types.
pub use error::{MemoryError, StoreError};
/// Persisted record model.
pub use model::InteractionRecord;
/// Cosine similarity over embedding slices.
pub use similarity::cosine_similarity;
/// Record store contract and default implementations.
pub use store::{InMemoryStore, JsonlStore, RecordStore};
