//! Shopping carts and their line items.
//!
//! A [`Cart`] holds an ordered list of [`LineItem`]s. Adding a product that
//! is already in the cart increments the existing line instead of appending
//! a duplicate, so product ids stay unique within one cart. Line item ids
//! are not checked against the products collection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::RecordId;

/// A (product, quantity) pair inside a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Id of the referenced product.
    pub id: RecordId,
    /// Number of units.
    pub quantity: u64,
}

/// A cart stored in the carts collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: RecordId,
    pub products: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new(id: RecordId) -> Self {
        Cart {
            id,
            products: Vec::new(),
        }
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    ///
    /// Returns the line item after the change.
    pub fn add_product(
        &mut self,
        product: RecordId,
        quantity: u64,
    ) -> Result<&LineItem, CoreError> {
        match self.products.iter().position(|item| item.id == product) {
            Some(index) => {
                let item = &mut self.products[index];
                match item.quantity.checked_add(quantity) {
                    Some(total) => item.quantity = total,
                    None => {
                        return Err(CoreError::QuantityOverflow {
                            cart: self.id.clone(),
                            product,
                        })
                    }
                }
                Ok(&self.products[index])
            }
            None => {
                self.products.push(LineItem {
                    id: product,
                    quantity,
                });
                Ok(&self.products[self.products.len() - 1])
            }
        }
    }

    /// Returns the line item for `product`, if present.
    pub fn line_item(&self, product: &RecordId) -> Option<&LineItem> {
        self.products.iter().find(|item| item.id == *product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(RecordId::from("c-1"));
        assert!(cart.products.is_empty());
        assert_eq!(
            serde_json::to_value(&cart).unwrap(),
            json!({ "id": "c-1", "products": [] })
        );
    }

    #[test]
    fn add_then_add_again_merges_quantity() {
        let mut cart = Cart::new(RecordId::from("c-1"));
        let pid = RecordId::from("p-1");

        let item = cart.add_product(pid.clone(), 3).unwrap();
        assert_eq!(item.quantity, 3);

        let item = cart.add_product(pid.clone(), 2).unwrap();
        assert_eq!(item.quantity, 5);

        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.line_item(&pid).unwrap().quantity, 5);
    }

    #[test]
    fn distinct_products_keep_insertion_order() {
        let mut cart = Cart::new(RecordId::from("c-1"));
        cart.add_product(RecordId::from("b"), 1).unwrap();
        cart.add_product(RecordId::from("a"), 1).unwrap();
        cart.add_product(RecordId::from("b"), 4).unwrap();

        let ids: Vec<&str> = cart.products.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(cart.products[0].quantity, 5);
    }

    #[test]
    fn overflow_is_rejected_and_leaves_quantity() {
        let mut cart = Cart::new(RecordId::from("c-1"));
        let pid = RecordId::from("p-1");
        cart.add_product(pid.clone(), u64::MAX).unwrap();

        let err = cart.add_product(pid.clone(), 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { .. }));
        assert_eq!(cart.line_item(&pid).unwrap().quantity, u64::MAX);
    }

    #[test]
    fn deserialize_rejects_string_quantity() {
        let result: Result<Cart, _> = serde_json::from_value(json!({
            "id": "c-1",
            "products": [{ "id": "p-1", "quantity": "3" }]
        }));
        assert!(result.is_err());
    }
}
