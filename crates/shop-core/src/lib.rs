//! Domain records for the shop backend.
//!
//! - [`id`]: record identifiers and the identifier generator
//! - [`product`]: free-form products with shallow-merge patching
//! - [`cart`]: carts with merge-on-add line items
//! - [`error`]: CoreError for rejected payloads

pub mod cart;
pub mod error;
pub mod id;
pub mod product;

pub use cart::{Cart, LineItem};
pub use error::CoreError;
pub use id::RecordId;
pub use product::{Fields, Product};
