//! Per-collection write locks.
//!
//! [`CollectionLocks`] hands out one async mutex per [`Collection`]. Every
//! write operation holds its collection's lock across the whole
//! load-mutate-save sequence, so two writers of the same collection can no
//! longer interleave and lose an update. Writers of different collections
//! do not contend. Reads never take a lock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use shop_storage::Collection;

/// Guard proving exclusive write access to one collection.
pub type CollectionGuard = OwnedMutexGuard<()>;

/// Lazily created write lock per collection.
///
/// Uses `DashMap` so lock lookup never blocks on another collection.
#[derive(Debug, Default)]
pub struct CollectionLocks {
    locks: DashMap<Collection, Arc<Mutex<()>>>,
}

impl CollectionLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive write access to `collection`.
    pub async fn acquire(&self, collection: Collection) -> CollectionGuard {
        // Clone the Arc out so the map shard is released before awaiting.
        let lock = self.locks.entry(collection).or_default().value().clone();
        lock.lock_owned().await
    }
}
