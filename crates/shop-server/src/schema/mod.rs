//! API schema types for request definitions.
//!
//! Responses are the domain records from `shop-core` serialized directly,
//! so only request-side types live here, plus the [`JsonBody`] extractor
//! that reads them.

pub mod body;
pub mod carts;
pub mod products;

pub use body::JsonBody;
