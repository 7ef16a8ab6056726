//! Router assembly for the shop HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes under `/api`
//! with CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// CORS is permissive.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Products
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{pid}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        // Carts
        .route("/carts", post(handlers::carts::create_cart))
        .route("/carts/{cid}", get(handlers::carts::get_cart_products))
        .route(
            "/carts/{cid}/product/{pid}",
            post(handlers::carts::add_product_to_cart),
        );

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
