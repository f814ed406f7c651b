//! Cart error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors produced by cart transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Item already in cart.
    #[error("Item already in cart: {0}")]
    ItemAlreadyInCart(ProductId),

    /// Requested amount exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Invalid amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in amount calculation")]
    Overflow,
}

impl CartError {
    /// Whether this error means the stock cannot cover the request.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::InsufficientStock { .. })
    }
}
