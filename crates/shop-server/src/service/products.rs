//! ProductService: CRUD over the products collection.
//!
//! Records are handled as raw JSON and only the one being read or changed
//! is decoded as a [`Product`]. Other records pass through untouched, so a
//! record written by hand with an unexpected shape does not break the rest
//! of the collection.

use std::sync::Arc;

use serde_json::Value;

use shop_core::{Product, RecordId};
use shop_storage::{decode_record, encode_record, record_id, Collection, CollectionStore};

use crate::concurrency::CollectionLocks;
use crate::error::ApiError;

const PRODUCTS: Collection = Collection::Products;

/// Service for the products collection.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn CollectionStore>,
    locks: Arc<CollectionLocks>,
}

impl ProductService {
    pub fn new(store: Arc<dyn CollectionStore>, locks: Arc<CollectionLocks>) -> Self {
        ProductService { store, locks }
    }

    /// Lists stored product records in order, truncated to `limit` when it
    /// parses as a positive integer. Any other `limit` is ignored.
    pub fn list_products(&self, limit: Option<&str>) -> Result<Vec<Value>, ApiError> {
        let mut products = self.load()?;
        if let Some(limit) = parse_limit(limit) {
            products.truncate(limit);
        }
        Ok(products)
    }

    /// Returns the product with the given id.
    pub fn get_product(&self, id: &RecordId) -> Result<Product, ApiError> {
        let record = self
            .load()?
            .into_iter()
            .find(|r| record_id(r) == Some(id.as_str()))
            .ok_or_else(|| not_found(id))?;
        Ok(decode_record(PRODUCTS, record)?)
    }

    /// Creates a product from caller-supplied fields with a fresh id.
    pub async fn create_product(&self, fields: Value) -> Result<Product, ApiError> {
        let product = Product::new(RecordId::generate(), fields)?;
        let record = encode_record(&product)?;

        let _guard = self.locks.acquire(PRODUCTS).await;
        let mut products = self.load()?;
        products.push(record);
        self.save(&products)?;

        tracing::debug!(product_id = %product.id, "created product");
        Ok(product)
    }

    /// Shallow-merges `patch` onto the product with the given id.
    pub async fn update_product(&self, id: &RecordId, patch: Value) -> Result<Product, ApiError> {
        let _guard = self.locks.acquire(PRODUCTS).await;
        let mut products = self.load()?;
        let slot = products
            .iter_mut()
            .find(|r| record_id(r) == Some(id.as_str()))
            .ok_or_else(|| not_found(id))?;
        let mut product: Product = decode_record(PRODUCTS, slot.clone())?;
        product.apply_patch(patch)?;
        *slot = encode_record(&product)?;
        self.save(&products)?;

        tracing::debug!(product_id = %id, "updated product");
        Ok(product)
    }

    /// Removes the product with the given id.
    pub async fn delete_product(&self, id: &RecordId) -> Result<(), ApiError> {
        let _guard = self.locks.acquire(PRODUCTS).await;
        let mut products = self.load()?;
        let before = products.len();
        products.retain(|r| record_id(r) != Some(id.as_str()));
        if products.len() == before {
            return Err(not_found(id));
        }
        self.save(&products)?;

        tracing::debug!(product_id = %id, "deleted product");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Value>, ApiError> {
        Ok(self.store.load(PRODUCTS)?)
    }

    fn save(&self, products: &[Value]) -> Result<(), ApiError> {
        Ok(self.store.save(PRODUCTS, products)?)
    }
}

/// Parses a `limit` query value; only positive integers truncate.
fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

fn not_found(id: &RecordId) -> ApiError {
    ApiError::NotFound(format!("product '{}' not found", id))
}
