//! Catalog entries and cart line items.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as published by the catalog service.
///
/// Fields the service sends beyond these are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Catalog key.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in reais.
    pub price: f64,
    /// Image URL.
    pub image: String,
}

impl CatalogEntry {
    /// Turn the entry into a cart line item with the given amount.
    pub fn into_line(self, amount: i64) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount,
        }
    }
}

/// A line item in the cart.
///
/// This is also the persisted shape: the cart snapshot is a JSON array of
/// these objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog key, unique within a cart.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price in reais.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Requested amount, at least 1.
    pub amount: i64,
}

impl Product {
    /// Unit price as money.
    pub fn unit_price(&self) -> Money {
        Money::from_decimal(self.price)
    }

    /// Unit price multiplied by the amount.
    pub fn subtotal(&self) -> Money {
        self.unit_price() * self.amount
    }

    /// Copy of this line with a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}
