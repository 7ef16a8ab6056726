//! Product handlers (list, get, create, update, delete).

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use shop_core::{Product, RecordId};

use crate::error::ApiError;
use crate::schema::products::ListProductsQuery;
use crate::schema::JsonBody;
use crate::state::AppState;

/// Lists stored product records, optionally truncated.
///
/// `GET /api/products?limit=N`
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let products = state.products.list_products(query.limit.as_deref())?;
    Ok(Json(products))
}

/// Returns one product.
///
/// `GET /api/products/{pid}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.get_product(&RecordId(pid))?;
    Ok(Json(product))
}

/// Creates a product.
///
/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<Value>,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.create_product(fields).await?;
    Ok(Json(product))
}

/// Shallow-merges fields onto a product.
///
/// `PUT /api/products/{pid}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    JsonBody(patch): JsonBody<Value>,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.update_product(&RecordId(pid), patch).await?;
    Ok(Json(product))
}

/// Deletes a product.
///
/// `DELETE /api/products/{pid}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<&'static str, ApiError> {
    state.products.delete_product(&RecordId(pid)).await?;
    Ok("Product deleted")
}
