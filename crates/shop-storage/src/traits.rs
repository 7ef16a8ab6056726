//! The [`CollectionStore`] trait defining the storage contract for record
//! collections.
//!
//! Every call covers a whole collection: `load` returns every record in
//! stored order and `save` replaces every record. There are no partial
//! reads, appends or locks at this layer; callers that need write
//! serialization provide it themselves.
//!
//! Records cross the trait boundary as `serde_json::Value`. A collection is
//! only rejected when it is not a JSON array; whether an individual record
//! fits a typed shape is decided per record with [`decode_record`], so one
//! odd record never hides the rest of its collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StorageError;
use crate::types::Collection;

/// The storage contract for record collections.
///
/// The trait is synchronous. Backends must be shareable across request
/// tasks.
pub trait CollectionStore: Send + Sync {
    /// Reads the full collection.
    fn load(&self, collection: Collection) -> Result<Vec<Value>, StorageError>;

    /// Overwrites the full collection with `records`.
    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), StorageError>;

    /// Creates the collection as an empty array if it does not exist yet.
    fn ensure(&self, collection: Collection) -> Result<(), StorageError>;
}

/// Returns the string `id` of a stored record.
///
/// Records without an `id`, or with a non-string one, have no id.
pub fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Decodes one stored record as `T`.
///
/// A record that does not match `T` is reported as [`StorageError::Parse`].
pub fn decode_record<T: DeserializeOwned>(
    collection: Collection,
    record: Value,
) -> Result<T, StorageError> {
    serde_json::from_value(record).map_err(|source| StorageError::Parse { collection, source })
}

/// Encodes a typed record for storage.
pub fn encode_record<T: Serialize>(record: &T) -> Result<Value, StorageError> {
    Ok(serde_json::to_value(record)?)
}
