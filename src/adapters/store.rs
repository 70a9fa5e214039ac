//! The message-log mirror: serializes the log into a key-value store.
//!
//! This is the store adapter from the sync engine's point of view. The
//! whole log lives as one JSON array under a single key; each append is a
//! read-modify-write of that value.

use std::sync::Arc;

use crate::domain::Message;
use crate::error::{StoreError, StoreResult};
use crate::ports::KeyValueStore;

/// Key under which the serialized message log is stored.
pub const MESSAGE_LOG_KEY: &str = "messages";

/// Persistence adapter for the message log.
///
/// Wraps any [`KeyValueStore`] and exposes log-shaped operations. The
/// mirror it maintains is subordinate to the in-memory log: when the two
/// disagree, callers rewrite the mirror with [`MessageStore::save_all`].
#[derive(Debug, Clone)]
pub struct MessageStore<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> MessageStore<S> {
    /// Creates an adapter over the given key-value store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads the full persisted log.
    ///
    /// Returns an empty vector if the key was never written. The returned
    /// order is whatever was persisted; callers re-sort before use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be read and
    /// [`StoreError::Corrupt`] if the stored payload does not deserialize.
    pub async fn load_all(&self) -> StoreResult<Vec<Message>> {
        match self.store.get(MESSAGE_LOG_KEY).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::corrupt),
        }
    }

    /// Appends one message to the persisted log.
    ///
    /// Read-modify-write of the full serialized value. Two overlapping
    /// appends can race and the mirror then loses one entry (last writer
    /// wins); accepted for a single-user local cache, since the in-memory
    /// log remains authoritative and the next full rewrite heals the
    /// mirror.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read or written, or if
    /// the existing payload is corrupt.
    pub async fn append(&self, message: &Message) -> StoreResult<()> {
        let mut log = self.load_all().await?;
        log.push(message.clone());
        self.save_all(&log).await
    }

    /// Rewrites the mirror from the authoritative in-memory log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    pub async fn save_all(&self, log: &[Message]) -> StoreResult<()> {
        let raw = serde_json::to_string(log).map_err(StoreError::corrupt)?;
        self.store.set(MESSAGE_LOG_KEY, &raw).await
    }
}
