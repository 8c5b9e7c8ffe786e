//! Record store contract and default implementations.

use crate::error::StoreError;
use crate::model::InteractionRecord;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
/// Append-only record store used by the memory engine.
///
/// `append` must be atomic with respect to concurrent appends: each call
/// produces exactly one fully-formed record, never a torn or interleaved
/// write. `scan` takes a fresh full scan per call and observes only
/// fully-written records.
pub trait RecordStore: Send + Sync {
    /// Durably append one record, returning its identifier.
    async fn append(&self, record: &InteractionRecord) -> Result<Uuid, StoreError>;

    /// Read all stored records.
    async fn scan(&self) -> Result<Vec<InteractionRecord>, StoreError>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn append(&self, record: &InteractionRecord) -> Result<Uuid, StoreError> {
        (**self).append(record).await
    }

    async fn scan(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        (**self).scan().await
    }
}

/// File-backed store keeping one JSON record per line.
#[derive(Debug)]
pub struct JsonlStore {
    /// Location of the JSONL file.
    path: PathBuf,
    /// Serializes appends so concurrent writers cannot interleave lines.
    append_lock: Mutex<()>,
}

impl JsonlStore {
    /// Create a store backed by the given file, creating parent
    /// directories as needed. The file itself is created on first append.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        info!("initialized jsonl record store (path={})", path.display());
        Ok(Self {
            path,
            append_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonlStore {
    /// Append a record as a single line under the mutation lock.
    async fn append(&self, record: &InteractionRecord) -> Result<Uuid, StoreError> {
        let line = serde_json::to_string(record)?;
        {
            let _guard = self.append_lock.lock();
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{line}")?;
        }
        debug!(
            "appended record (id={}, embedding_dim={})",
            record.id,
            record.embedding.len()
        );
        Ok(record.id)
    }

    /// Scan every line of the backing file, skipping blanks.
    async fn scan(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = OpenOptions::new().read(true).open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: InteractionRecord = serde_json::from_str(&line)?;
            records.push(record);
        }
        debug!("scanned record store (count={})", records.len());
        Ok(records)
    }
}

/// Ephemeral store holding records in memory. Used in tests and as a
/// non-durable backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<InteractionRecord>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn append(&self, record: &InteractionRecord) -> Result<Uuid, StoreError> {
        self.records.write().push(record.clone());
        Ok(record.id)
    }

    async fn scan(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        Ok(self.records.read().clone())
    }
}
