//! Interaction service and HTTP surface for Mnemo.
//!
//! The service orchestrates the embedding provider and the memory
//! engine to answer a query end to end; the routes expose it over HTTP
//! (`POST /query`, `GET /memory`, `GET /`).

pub mod error;
pub mod routes;
pub mod service;
pub mod state;

/// Service-level error type.
pub use error::ServiceError;
/// Router construction.
pub use routes::router;
/// Query orchestration.
pub use service::{DynRecordStore, InteractionService, QueryOutcome};
/// Shared handler state.
pub use state::AppState;
