//! Product records with free-form fields.
//!
//! A [`Product`] carries a generated [`RecordId`] plus whatever fields the
//! caller supplied. There is no schema beyond `id`. Updates are shallow
//! merges: every top-level key in the patch replaces the stored value, all
//! other keys are left untouched. The identifier itself is never part of
//! [`Product::fields`] and a patch cannot change it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::id::RecordId;

/// Free-form top-level fields of a record.
pub type Fields = Map<String, Value>;

/// A product stored in the products collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Generator-assigned identifier.
    pub id: RecordId,
    /// Caller-supplied fields, flattened next to `id` on the wire.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Product {
    /// Builds a product from a caller payload, assigning `id`.
    ///
    /// Any `id` key in the payload is discarded in favour of the assigned one.
    pub fn new(id: RecordId, payload: Value) -> Result<Self, CoreError> {
        let mut fields = into_fields(payload)?;
        fields.remove("id");
        Ok(Product { id, fields })
    }

    /// Shallow-merges `patch` onto this product.
    ///
    /// The patch is checked in full before anything is written, so a rejected
    /// patch leaves the product unchanged.
    pub fn apply_patch(&mut self, patch: Value) -> Result<(), CoreError> {
        let mut patch = into_fields(patch)?;
        if let Some(requested) = patch.remove("id") {
            let same = matches!(&requested, Value::String(s) if self.id.as_str() == s);
            if !same {
                return Err(CoreError::IdChange {
                    current: self.id.clone(),
                    requested: match requested {
                        Value::String(s) => s,
                        other => other.to_string(),
                    },
                });
            }
        }
        for (key, value) in patch {
            self.fields.insert(key, value);
        }
        Ok(())
    }
}

fn into_fields(payload: Value) -> Result<Fields, CoreError> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::NotAnObject {
            kind: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
