//! Cart handlers (create, get line items, add product).

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use shop_core::{Cart, RecordId};

use crate::error::ApiError;
use crate::schema::carts::AddProductRequest;
use crate::schema::JsonBody;
use crate::state::AppState;

/// Creates an empty cart.
///
/// `POST /api/carts`
pub async fn create_cart(State(state): State<AppState>) -> Result<Json<Cart>, ApiError> {
    let cart = state.carts.create_cart().await?;
    Ok(Json(cart))
}

/// Returns the line items of a cart.
///
/// `GET /api/carts/{cid}`
pub async fn get_cart_products(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let products = state.carts.get_cart_products(&RecordId(cid))?;
    Ok(Json(products))
}

/// Adds a product to a cart.
///
/// `POST /api/carts/{cid}/product/{pid}`
pub async fn add_product_to_cart(
    State(state): State<AppState>,
    Path((cid, pid)): Path<(String, String)>,
    JsonBody(req): JsonBody<AddProductRequest>,
) -> Result<Json<Cart>, ApiError> {
    let quantity = req.quantity()?;
    let cart = state
        .carts
        .add_product_to_cart(&RecordId(cid), RecordId(pid), quantity)
        .await?;
    Ok(Json(cart))
}
