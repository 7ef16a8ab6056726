//! Storage error types for shop-storage.
//!
//! [`StorageError`] separates the two ways a collection can fail: the
//! backing file cannot be read or written, or its content is not a JSON
//! array of the expected records.

use thiserror::Error;

use crate::types::Collection;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read, written or renamed.
    #[error("i/o error on collection {collection}: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    /// Stored content is not a JSON array, or a stored record does not have
    /// the shape it was decoded as.
    #[error("collection {collection} holds malformed content: {source}")]
    Parse {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
