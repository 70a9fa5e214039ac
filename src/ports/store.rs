//! Storage port: an abstract asynchronous key-value store.
//!
//! Models the persistent cache available to the client (browser local
//! storage, a file on disk, an in-memory map in tests). The message log is
//! mirrored under a single well-known key; see
//! [`crate::adapters::store::MessageStore`].

use async_trait::async_trait;

use crate::error::StoreResult;

/// Port for the persistent key-value cache.
///
/// Implementations are free to suspend, but must present each `get`/`set`
/// as atomic from the caller's perspective: no partially written value is
/// ever observable.
///
/// # Errors
///
/// Both operations fail with [`crate::error::StoreError::Unavailable`] when
/// the backing store cannot be reached; callers treat that as a soft
/// failure and continue with in-memory state.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if never written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError`] if the store cannot be read.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError`] if the store cannot be written.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
