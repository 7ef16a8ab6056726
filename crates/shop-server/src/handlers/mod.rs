//! HTTP handler modules for the shop API.
//!
//! Each sub-module implements thin handlers that extract path, query and body
//! values, delegate to the matching collection service, and return JSON
//! responses. No business logic lives in handlers.

pub mod carts;
pub mod products;
