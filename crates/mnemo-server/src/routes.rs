//! HTTP routes exposing the interaction service.

use crate::error::ServiceError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::warn;
use mnemo_memory::{InteractionRecord, ScoredRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Build the HTTP router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/query", post(query))
        .route("/memory", get(memory))
        .with_state(state)
}

/// Request body for `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Query text; missing or empty values are a client error.
    #[serde(default)]
    pub query: Option<String>,
}

/// Response body for `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Synthesized response text.
    pub response: String,
    /// Related past interactions with their similarity scores.
    pub relevant_memories: Vec<RelevantMemory>,
}

/// One related interaction: the record's fields plus its similarity.
#[derive(Debug, Serialize)]
pub struct RelevantMemory {
    #[serde(flatten)]
    record: InteractionRecord,
    similarity: f32,
}

impl From<ScoredRecord> for RelevantMemory {
    fn from(scored: ScoredRecord) -> Self {
        Self {
            record: scored.record,
            similarity: scored.similarity,
        }
    }
}

/// Error response mapping: client errors say what was wrong, internal
/// failures return a safe generic message.
struct ApiError(ServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No query provided" })),
            )
                .into_response(),
            err => {
                warn!("request failed (error={err})");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

/// `GET /` — welcome message.
async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to Mnemo" }))
}

/// `POST /query` — answer a query and log the interaction.
async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let query = request.query.ok_or(ServiceError::EmptyQuery)?;
    let outcome = state.service.handle_query(&query).await?;
    Ok(Json(QueryResponse {
        response: outcome.response,
        relevant_memories: outcome.related.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /memory` — all stored records, verbatim.
async fn memory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InteractionRecord>>, ApiError> {
    let records = state.service.list_memory().await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::router;
    use crate::service::InteractionService;
    use crate::state::AppState;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use mnemo_memory::{InMemoryStore, MemoryEngine, RecordStore, RetrievalConfig};
    use mnemo_test_utils::{FailingStore, StubEmbedder};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with_store(store: Arc<dyn RecordStore>) -> Router {
        let embedder = StubEmbedder::new(2)
            .with_vector("what is rust", vec![1.0, 0.0])
            .with_vector("explain rust", vec![1.0, 0.0]);
        let config = RetrievalConfig {
            k: 5,
            threshold: 0.8,
            deadline: None,
        };
        let service = InteractionService::new(
            Arc::new(embedder),
            MemoryEngine::with_config(store, config),
        );
        router(AppState::new(service))
    }

    fn app() -> Router {
        app_with_store(Arc::new(InMemoryStore::new()))
    }

    fn post_query(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn home_returns_welcome() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Welcome to Mnemo");
    }

    #[tokio::test]
    async fn query_answers_and_logs() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_query(r#"{"query": "what is rust"}"#))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["response"],
            "Default response to your query: what is rust"
        );
        assert_eq!(body["relevant_memories"], serde_json::json!([]));

        let response = app
            .clone()
            .oneshot(post_query(r#"{"query": "explain rust"}"#))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let memories = body["relevant_memories"].as_array().expect("array");
        assert_eq!(memories.len(), 1);
        assert_eq!(memories[0]["query"], "what is rust");
        assert!(memories[0]["similarity"].as_f64().expect("similarity") > 0.99);
    }

    #[tokio::test]
    async fn missing_query_is_a_client_error() {
        let response = app()
            .oneshot(post_query("{}"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No query provided");
    }

    #[tokio::test]
    async fn blank_query_is_a_client_error() {
        let response = app()
            .oneshot(post_query(r#"{"query": "  "}"#))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn memory_lists_stored_records() {
        let app = app();
        app.clone()
            .oneshot(post_query(r#"{"query": "what is rust"}"#))
            .await
            .expect("query response");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/memory")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let records = body.as_array().expect("array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["query"], "what is rust");
        assert_eq!(records[0]["interaction_type"], "text");
    }

    #[tokio::test]
    async fn store_failure_is_a_server_error_with_safe_message() {
        let store = Arc::new(FailingStore::new());
        store.set_fail_scan(true);
        let app = app_with_store(store);

        let response = app
            .oneshot(post_query(r#"{"query": "what is rust"}"#))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal error");
    }
}
