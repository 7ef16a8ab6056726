//! Collection services: the coordinators between HTTP handlers and the
//! collection store.
//!
//! Each service reconstructs its collection from the store on every call,
//! applies an in-memory transformation and, for writes, saves the whole
//! collection back while holding the collection's write lock. A failure
//! before `save` leaves the stored collection untouched.

pub mod carts;
pub mod products;

pub use carts::CartService;
pub use products::ProductService;
