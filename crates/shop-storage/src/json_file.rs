//! JSON file implementation of [`CollectionStore`].
//!
//! [`JsonFileStore`] keeps one pretty-printed JSON array per collection in a
//! data directory. Saves write a temporary sibling file and rename it over
//! the target, so readers see either the old or the new array in full.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::CollectionStore;
use crate::types::Collection;

/// Collection store backed by JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(JsonFileStore { root })
    }

    /// Path of the file backing `collection`.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self, collection: Collection) -> Result<Vec<Value>, StorageError> {
        let content = fs::read_to_string(self.path(collection))
            .map_err(|source| StorageError::Io { collection, source })?;
        serde_json::from_str(&content).map_err(|source| StorageError::Parse { collection, source })
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(records)?;
        let target = self.path(collection);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", collection.file_name(), Uuid::new_v4()));

        let io_err = |source: std::io::Error| StorageError::Io { collection, source };
        fs::write(&tmp, content).map_err(io_err)?;
        if let Err(source) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(source));
        }
        Ok(())
    }

    fn ensure(&self, collection: Collection) -> Result<(), StorageError> {
        if self.path(collection).exists() {
            return Ok(());
        }
        self.save(collection, &[])
    }
}
