//! Storage abstraction for shop record collections.
//!
//! Provides the [`CollectionStore`] trait defining the whole-collection
//! load/save contract, plus the [`JsonFileStore`] and [`InMemoryStore`]
//! backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError with I/O and parse failure modes
//! - [`types`]: Collection names and their backing file names
//! - [`traits`]: CollectionStore trait and per-record decode/encode helpers
//! - [`json_file`]: JsonFileStore implementation
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::{decode_record, encode_record, record_id, CollectionStore};
pub use types::Collection;
