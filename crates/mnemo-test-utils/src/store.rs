use async_trait::async_trait;
use mnemo_memory::{InMemoryStore, InteractionRecord, RecordStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// Record store wrapper that injects failures on demand.
///
/// Wraps an [`InMemoryStore`] and fails `append` or `scan` with an IO
/// error while the corresponding flag is set.
#[derive(Default)]
pub struct FailingStore {
    inner: InMemoryStore,
    fail_append: AtomicBool,
    fail_scan: AtomicBool,
}

impl FailingStore {
    /// Create a store with no failures armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm or disarm append failures.
    pub fn set_fail_append(&self, fail: bool) {
        self.fail_append.store(fail, Ordering::SeqCst);
    }

    /// Arm or disarm scan failures.
    pub fn set_fail_scan(&self, fail: bool) {
        self.fail_scan.store(fail, Ordering::SeqCst);
    }

    /// The wrapped in-memory store.
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn append(&self, record: &InteractionRecord) -> Result<Uuid, StoreError> {
        if self.fail_append.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other(
                "injected append failure",
            )));
        }
        self.inner.append(record).await
    }

    async fn scan(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        if self.fail_scan.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other(
                "injected scan failure",
            )));
        }
        self.inner.scan().await
    }
}
