//! Storage-layer types for collection identity.
//!
//! [`Collection`] names one of the persisted record sets. Each collection is
//! backed by exactly one JSON array file whose name is fixed here.

use std::fmt;

/// A named collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Carts,
}

impl Collection {
    /// All known collections.
    pub const ALL: [Collection; 2] = [Collection::Products, Collection::Carts];

    /// Logical collection name.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Carts => "carts",
        }
    }

    /// File name of the backing JSON array.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Products => "productos.json",
            Collection::Carts => "carrito.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
