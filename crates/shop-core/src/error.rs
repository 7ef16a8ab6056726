//! Core error types for shop-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the ways a caller-supplied payload can be rejected by the domain model.

use thiserror::Error;

use crate::id::RecordId;

/// Core errors produced by the shop-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A create or update payload was not a JSON object.
    #[error("record fields must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// A patch tried to replace the identifier of an existing record.
    #[error("cannot change id of record '{current}' to '{requested}'")]
    IdChange {
        current: RecordId,
        requested: String,
    },

    /// Adding to a line item would overflow its quantity.
    #[error("quantity overflow for product '{product}' in cart '{cart}'")]
    QuantityOverflow { cart: RecordId, product: RecordId },
}
