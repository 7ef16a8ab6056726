//! Write serialization for collection read-modify-write sequences.
//!
//! - [`collection_locks::CollectionLocks`] for one async mutex per collection

pub mod collection_locks;

pub use collection_locks::{CollectionGuard, CollectionLocks};
