//! Application state shared by all handlers.
//!
//! [`AppState`] owns the two collection services. Both share one
//! [`CollectionStore`] and one [`CollectionLocks`] table, so writes to the
//! same collection are serialized no matter which handler performs them.
//! Nothing is cached: every request reads its collection from the store.

use std::sync::Arc;

use shop_storage::{Collection, CollectionStore, InMemoryStore, JsonFileStore};

use crate::concurrency::CollectionLocks;
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::{CartService, ProductService};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Products collection service.
    pub products: ProductService,
    /// Carts collection service.
    pub carts: CartService,
}

impl AppState {
    /// Creates state backed by JSON files in `config.data_dir`.
    ///
    /// Missing collection files are created as empty arrays.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let store = JsonFileStore::new(&config.data_dir).map_err(|e| {
            ApiError::InternalError(format!(
                "failed to open data directory {}: {}",
                config.data_dir.display(),
                e
            ))
        })?;
        Self::with_store(Arc::new(store))
    }

    /// Creates state backed by an in-memory store (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Creates state over an arbitrary store, initialising every collection.
    pub fn with_store(store: Arc<dyn CollectionStore>) -> Result<Self, ApiError> {
        for collection in Collection::ALL {
            store.ensure(collection)?;
        }

        let locks = Arc::new(CollectionLocks::new());
        Ok(AppState {
            products: ProductService::new(Arc::clone(&store), Arc::clone(&locks)),
            carts: CartService::new(store, locks),
        })
    }
}
