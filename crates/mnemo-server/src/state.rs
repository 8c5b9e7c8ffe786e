//! Shared state for HTTP handlers.

use crate::service::InteractionService;
use std::sync::Arc;

/// Handler state: the shared interaction service.
#[derive(Clone)]
pub struct AppState {
    /// The interaction service answering queries.
    pub service: Arc<InteractionService>,
}

impl AppState {
    /// Wrap a service for sharing across handlers.
    pub fn new(service: InteractionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
