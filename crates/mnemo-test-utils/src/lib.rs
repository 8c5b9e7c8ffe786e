//! Shared stubs for testing Mnemo crates.

mod embed;
mod store;

/// Canned-vector embedding provider.
pub use embed::StubEmbedder;
/// Failure-injecting record store.
pub use store::FailingStore;
