//! Interaction record model persisted by record stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default category tag for interactions.
pub const DEFAULT_INTERACTION_TYPE: &str = "text";

/// Persisted query/response pair with the query's embedding.
///
/// Records are append-only: once written they are never mutated or
/// deleted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRecord {
    /// Record identifier, assigned once at creation.
    pub id: Uuid,
    /// Original query text.
    pub query: String,
    /// Response produced for the query.
    pub response: String,
    /// Query embedding; length is fixed for the lifetime of a store.
    pub embedding: Vec<f32>,
    /// Alphabetic tokens extracted from the query, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Creation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Interaction category tag.
    #[serde(default = "default_interaction_type")]
    pub interaction_type: String,
}

/// Default interaction type used when the field is absent on disk.
fn default_interaction_type() -> String {
    DEFAULT_INTERACTION_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::InteractionRecord;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn record_round_trips_through_json() {
        let record = InteractionRecord {
            id: Uuid::new_v4(),
            query: "what is rust".to_string(),
            response: "a systems language".to_string(),
            embedding: vec![0.25, -0.5, 1.0],
            keywords: Some(vec!["what".to_string(), "rust".to_string()]),
            timestamp: Utc::now(),
            interaction_type: "text".to_string(),
        };
        let line = serde_json::to_string(&record).expect("serialize");
        let decoded: InteractionRecord = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(decoded, record);
        let reencoded = serde_json::to_string(&decoded).expect("reserialize");
        assert_eq!(reencoded, line);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let line = format!(
            r#"{{"id":"{}","query":"q","response":"r","embedding":[1.0],"timestamp":"{}"}}"#,
            Uuid::new_v4(),
            Utc::now().to_rfc3339(),
        );
        let decoded: InteractionRecord = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(decoded.keywords, None);
        assert_eq!(decoded.interaction_type, "text");
    }
}
