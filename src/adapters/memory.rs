//! In-memory implementation of the `KeyValueStore` port.
//!
//! Provides a simple, thread-safe store for unit testing and for embedding
//! the core without durable storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::ports::KeyValueStore;

/// In-memory implementation of [`KeyValueStore`].
///
/// Thread-safe via internal [`RwLock`]. Contents are lost when the last
/// clone is dropped.
///
/// # Example
///
/// ```
/// use palaver::adapters::memory::InMemoryKeyValueStore;
/// use palaver::ports::KeyValueStore;
///
/// let store = InMemoryKeyValueStore::new();
/// // Use store in tests...
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store. For error-propagating access, use the
    /// port methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let guard = self
            .values
            .read()
            .map_err(|e| StoreError::unavailable(format!("lock poisoned: {e}")))?;

        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut guard = self
            .values
            .write()
            .map_err(|e| StoreError::unavailable(format!("lock poisoned: {e}")))?;

        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
