//! Cart request types.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /api/carts/{cid}/product/{pid}`.
///
/// `quantity` is accepted as any JSON value and checked by
/// [`AddProductRequest::quantity`], so that a string or fractional quantity
/// produces a `BAD_REQUEST` error body rather than an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct AddProductRequest {
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl AddProductRequest {
    /// Validates the requested quantity as a positive integer.
    pub fn quantity(&self) -> Result<u64, ApiError> {
        match &self.quantity {
            Some(Value::Number(n)) => match n.as_u64() {
                Some(q) if q > 0 => Ok(q),
                _ => Err(invalid(&n.to_string())),
            },
            Some(other) => Err(invalid(&other.to_string())),
            None => Err(ApiError::BadRequest("quantity is required".to_string())),
        }
    }
}

fn invalid(raw: &str) -> ApiError {
    ApiError::BadRequest(format!(
        "quantity must be a positive integer, got {}",
        raw
    ))
}
