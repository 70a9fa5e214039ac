//! File-backed implementation of the `KeyValueStore` port.
//!
//! Each key maps to one UTF-8 file inside a capability-scoped directory:
//! the adapter holds a `cap-std` directory handle and cannot touch anything
//! outside it.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::{StoreError, StoreResult};
use crate::ports::KeyValueStore;

/// Durable [`KeyValueStore`] writing one file per key.
///
/// Keys are expected to be simple tokens (such as the log key
/// `"messages"`); they are used verbatim as file stems. Writes go through
/// a temporary file and a rename, so readers never observe a partial
/// value.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: Dir,
}

impl JsonFileStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StoreResult<Self> {
        std::fs::create_dir_all(path.as_std_path()).map_err(StoreError::unavailable)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StoreError::unavailable)?;
        Ok(Self { dir })
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::unavailable(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let staging = format!("{key}.json.tmp");
        self.dir
            .write(&staging, value)
            .map_err(StoreError::unavailable)?;
        self.dir
            .rename(&staging, &self.dir, Self::file_name(key))
            .map_err(StoreError::unavailable)
    }
}
