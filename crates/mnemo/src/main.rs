//! Mnemo server binary: config load, wiring, and HTTP startup.

use anyhow::Context;
use clap::Parser;
use log::info;
use mnemo_config::MnemoConfig;
use mnemo_embed::HashEmbedder;
use mnemo_memory::{JsonlStore, MemoryEngine, RecordStore, RetrievalConfig};
use mnemo_server::{AppState, InteractionService, router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Embedding-based conversational memory service.
#[derive(Debug, Parser)]
#[command(name = "mnemo", version, about)]
struct Cli {
    /// Path to a mnemo.json5 config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the configured record store path.
    #[arg(long)]
    memory_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mnemo::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MnemoConfig::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("resolving working directory")?;
            MnemoConfig::load_or_default(cwd)?
        }
    };
    if let Some(path) = &cli.memory_path {
        config.memory.path = path.display().to_string();
    }

    let store: Arc<dyn RecordStore> =
        Arc::new(JsonlStore::new(&config.memory.path).context("opening record store")?);
    let embedder = Arc::new(HashEmbedder::new(config.embedding.dimension));
    let engine = MemoryEngine::with_config(
        store,
        RetrievalConfig {
            k: config.memory.recall_k,
            threshold: config.memory.similarity_threshold,
            deadline: config.memory.retrieval_deadline_ms.map(Duration::from_millis),
        },
    );
    let service = InteractionService::new(embedder, engine);
    let app = router(AppState::new(service));

    let port = cli.port.unwrap_or_else(|| config.server.effective_port());
    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .context("parsing bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        "mnemo listening (addr={}, store={})",
        addr, config.memory.path
    );
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
