//! Record identifiers for products, carts and line items.
//!
//! [`RecordId`] is an opaque string newtype. Fresh identifiers come from
//! [`RecordId::generate`], a random UUID v4 in canonical hyphenated form.
//! No collision check is performed against stored records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored record.
///
/// Serializes transparently as a JSON string. Identifiers read back from
/// disk or from a request path are not required to be UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}
