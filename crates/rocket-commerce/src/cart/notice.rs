//! User-facing cart notifications.

use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cart operation that produced a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartOperation {
    /// Adding a product.
    Add,
    /// Removing a product.
    Remove,
    /// Changing a product's amount.
    UpdateAmount,
}

impl CartOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartOperation::Add => "add",
            CartOperation::Remove => "remove",
            CartOperation::UpdateAmount => "update_amount",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message for the shopper.
///
/// These are the only failure signals a cart operation emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The stock cannot cover the requested amount.
    OutOfStock,
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product's amount failed.
    UpdateFailed,
}

impl Notice {
    /// The generic failure notice for an operation.
    pub fn failure(operation: CartOperation) -> Self {
        match operation {
            CartOperation::Add => Notice::AddFailed,
            CartOperation::Remove => Notice::RemoveFailed,
            CartOperation::UpdateAmount => Notice::UpdateFailed,
        }
    }

    /// The notice to show when a cart transition is rejected.
    pub fn for_error(operation: CartOperation, error: &CartError) -> Self {
        if error.is_out_of_stock() {
            Notice::OutOfStock
        } else {
            Self::failure(operation)
        }
    }

    /// Message text shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock => "requested quantity unavailable",
            Notice::AddFailed => "error adding product",
            Notice::RemoveFailed => "error removing product",
            Notice::UpdateFailed => "error updating product quantity",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_messages() {
        assert_eq!(Notice::OutOfStock.to_string(), "requested quantity unavailable");
        assert_eq!(Notice::AddFailed.to_string(), "error adding product");
        assert_eq!(Notice::RemoveFailed.to_string(), "error removing product");
        assert_eq!(Notice::UpdateFailed.to_string(), "error updating product quantity");
    }

    #[test]
    fn test_for_error() {
        let out_of_stock = CartError::InsufficientStock {
            product_id: ProductId::new(1),
            requested: 2,
            available: 1,
        };
        assert_eq!(
            Notice::for_error(CartOperation::UpdateAmount, &out_of_stock),
            Notice::OutOfStock
        );

        let missing = CartError::ItemNotInCart(ProductId::new(1));
        assert_eq!(Notice::for_error(CartOperation::Remove, &missing), Notice::RemoveFailed);
        assert_eq!(
            Notice::for_error(CartOperation::UpdateAmount, &CartError::InvalidAmount(0)),
            Notice::UpdateFailed
        );
    }
}
