//! HTTP/JSON API server for the product and cart collections.
//!
//! Exposes CRUD routes under `/api` over two JSON-file collections. This crate
//! contains the server framework, collection services, write locks, request
//! schema types, error handling, and route definitions.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
