//! Configuration schema for Mnemo.

use serde::{Deserialize, Serialize};

/// Root config for the Mnemo service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MnemoConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl MnemoConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> MnemoConfigBuilder {
        MnemoConfigBuilder::new()
    }
}

/// Builder for assembling a `MnemoConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct MnemoConfigBuilder {
    config: MnemoConfig,
}

impl MnemoConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: MnemoConfig::default(),
        }
    }

    /// Replace the memory configuration.
    pub fn memory(mut self, memory: MemoryConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the embedding configuration.
    pub fn embedding(mut self, embedding: EmbeddingConfig) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Replace the server configuration.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Finalize and return the built `MnemoConfig`.
    pub fn build(self) -> MnemoConfig {
        self.config
    }
}

/// Memory store and retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Location of the JSONL record store.
    #[serde(default = "default_memory_path")]
    pub path: String,
    /// Maximum number of related interactions to retrieve.
    #[serde(default = "default_recall_k")]
    pub recall_k: usize,
    /// Minimum cosine similarity (exclusive) for a match.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
    /// Optional retrieval deadline in milliseconds.
    #[serde(default)]
    pub retrieval_deadline_ms: Option<u64>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
            recall_k: default_recall_k(),
            similarity_threshold: default_similarity_threshold(),
            retrieval_deadline_ms: None,
        }
    }
}

/// Default record store location.
fn default_memory_path() -> String {
    "mnemo_memory.jsonl".to_string()
}

/// Default number of memories to recall per query.
fn default_recall_k() -> usize {
    5
}

/// Default similarity threshold for recall.
fn default_similarity_threshold() -> f32 {
    0.8
}

/// Embedding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider identifier.
    #[serde(default = "default_embedding_provider")]
    pub provider: String,
    /// Output dimension for the hashing provider.
    #[serde(default = "default_embedding_dimension")]
    pub dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: default_embedding_provider(),
            dimension: default_embedding_dimension(),
        }
    }
}

/// Default embedding provider identifier.
fn default_embedding_provider() -> String {
    "hash".to_string()
}

/// Default embedding dimension.
fn default_embedding_dimension() -> usize {
    64
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port; the `PORT` environment variable takes precedence.
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl ServerConfig {
    /// Bind port with the `PORT` environment override applied.
    ///
    /// Hosting platforms inject the listening port through `PORT`; an
    /// unparsable value is ignored in favor of the configured port.
    pub fn effective_port(&self) -> u16 {
        match std::env::var("PORT") {
            Ok(value) => value.parse().unwrap_or(self.port),
            Err(_) => self.port,
        }
    }
}

/// Default server bind address.
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port.
fn default_server_port() -> u16 {
    22531
}
