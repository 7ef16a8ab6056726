//! CartService: carts and their line items.
//!
//! As with products, only the cart being read or changed is decoded; other
//! stored records are written back exactly as they were loaded.

use std::sync::Arc;

use serde_json::Value;

use shop_core::{Cart, RecordId};
use shop_storage::{decode_record, encode_record, record_id, Collection, CollectionStore};

use crate::concurrency::CollectionLocks;
use crate::error::ApiError;

const CARTS: Collection = Collection::Carts;

/// Service for the carts collection.
///
/// Carts have no delete operation. Line item product ids are not checked
/// against the products collection.
#[derive(Clone)]
pub struct CartService {
    store: Arc<dyn CollectionStore>,
    locks: Arc<CollectionLocks>,
}

impl CartService {
    pub fn new(store: Arc<dyn CollectionStore>, locks: Arc<CollectionLocks>) -> Self {
        CartService { store, locks }
    }

    /// Returns the stored line items of a cart.
    pub fn get_cart_products(&self, cart_id: &RecordId) -> Result<Vec<Value>, ApiError> {
        let mut cart = self
            .load()?
            .into_iter()
            .find(|r| record_id(r) == Some(cart_id.as_str()))
            .ok_or_else(|| not_found(cart_id))?;
        let products = cart
            .get_mut("products")
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(decode_record(CARTS, products)?)
    }

    /// Creates an empty cart with a fresh id.
    pub async fn create_cart(&self) -> Result<Cart, ApiError> {
        let cart = Cart::new(RecordId::generate());
        let record = encode_record(&cart)?;

        let _guard = self.locks.acquire(CARTS).await;
        let mut carts = self.load()?;
        carts.push(record);
        self.save(&carts)?;

        tracing::debug!(cart_id = %cart.id, "created cart");
        Ok(cart)
    }

    /// Adds `quantity` units of a product to a cart, merging with an
    /// existing line item for the same product.
    pub async fn add_product_to_cart(
        &self,
        cart_id: &RecordId,
        product_id: RecordId,
        quantity: u64,
    ) -> Result<Cart, ApiError> {
        let _guard = self.locks.acquire(CARTS).await;
        let mut carts = self.load()?;
        let slot = carts
            .iter_mut()
            .find(|r| record_id(r) == Some(cart_id.as_str()))
            .ok_or_else(|| not_found(cart_id))?;
        let mut cart: Cart = decode_record(CARTS, slot.clone())?;
        let total = cart.add_product(product_id, quantity)?.quantity;
        *slot = encode_record(&cart)?;
        self.save(&carts)?;

        tracing::debug!(cart_id = %cart_id, total, "added product to cart");
        Ok(cart)
    }

    fn load(&self) -> Result<Vec<Value>, ApiError> {
        Ok(self.store.load(CARTS)?)
    }

    fn save(&self, carts: &[Value]) -> Result<(), ApiError> {
        Ok(self.store.save(CARTS, carts)?)
    }
}

fn not_found(id: &RecordId) -> ApiError {
    ApiError::NotFound(format!("cart '{}' not found", id))
}
