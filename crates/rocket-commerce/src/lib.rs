//! Cart domain types and logic for RocketShoes.
//!
//! This crate provides the types shared by the cart store and its adapters:
//!
//! - **Catalog**: catalog entries, cart line items, stock records
//! - **Cart**: the line-item collection with stock-checked transitions
//! - **Notices**: the user-facing messages cart operations emit
//!
//! # Example
//!
//! ```rust
//! use rocket_commerce::prelude::*;
//!
//! let entry = CatalogEntry {
//!     id: ProductId::new(1),
//!     title: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: 179.9,
//!     image: "https://example.com/tenis1.jpg".to_string(),
//! };
//!
//! let cart = Cart::new().with_new_line(entry).unwrap();
//! let cart = cart
//!     .incremented(ProductId::new(1), &Stock::new(ProductId::new(1), 3))
//!     .unwrap();
//!
//! assert_eq!(cart.total().display(), "R$ 359,80");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;

pub use error::CartError;
pub use ids::ProductId;
pub use money::{format_price, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{format_price, Money};

    // Catalog
    pub use crate::catalog::{CatalogEntry, Product, Stock};

    // Cart
    pub use crate::cart::{Cart, CartOperation, Notice};
}
