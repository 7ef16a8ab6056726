//! In-memory implementation of [`CollectionStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral
//! servers. It keeps the serialized JSON text of each collection, so parse
//! behaviour is identical to [`JsonFileStore`](crate::JsonFileStore).

use dashmap::DashMap;
use serde_json::Value;

use crate::error::StorageError;
use crate::traits::CollectionStore;
use crate::types::Collection;

/// Collection store holding serialized collections in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: DashMap<Collection, String>,
}

impl InMemoryStore {
    /// Creates a store with every known collection initialised to `[]`.
    pub fn new() -> Self {
        let store = InMemoryStore::default();
        for collection in Collection::ALL {
            store.collections.insert(collection, "[]".to_string());
        }
        store
    }

    /// Replaces the stored text of a collection verbatim.
    pub fn set_raw(&self, collection: Collection, content: impl Into<String>) {
        self.collections.insert(collection, content.into());
    }

    /// Returns the stored text of a collection.
    pub fn raw(&self, collection: Collection) -> Option<String> {
        self.collections.get(&collection).map(|c| c.value().clone())
    }

    /// Forgets a collection, making later loads fail like a missing file.
    pub fn remove(&self, collection: Collection) {
        self.collections.remove(&collection);
    }
}

impl CollectionStore for InMemoryStore {
    fn load(&self, collection: Collection) -> Result<Vec<Value>, StorageError> {
        let content = self.raw(collection).ok_or_else(|| StorageError::Io {
            collection,
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("collection {collection} does not exist"),
            ),
        })?;
        serde_json::from_str(&content).map_err(|source| StorageError::Parse { collection, source })
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(records)?;
        self.collections.insert(collection, content);
        Ok(())
    }

    fn ensure(&self, collection: Collection) -> Result<(), StorageError> {
        self.collections
            .entry(collection)
            .or_insert_with(|| "[]".to_string());
        Ok(())
    }
}
