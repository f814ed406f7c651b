//! Stock records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Units of a product currently available, as reported by the stock service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Catalog key.
    pub id: ProductId,
    /// Available units.
    pub amount: i64,
}

impl Stock {
    /// Create a new stock record.
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Check if at least one unit is available.
    pub fn is_available(&self) -> bool {
        self.amount >= 1
    }

    /// Check if a specific amount can be held in a cart.
    pub fn can_fulfill(&self, amount: i64) -> bool {
        amount <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_availability() {
        assert!(Stock::new(ProductId::new(1), 1).is_available());
        assert!(!Stock::new(ProductId::new(1), 0).is_available());
    }

    #[test]
    fn test_can_fulfill() {
        let stock = Stock::new(ProductId::new(1), 3);
        assert!(stock.can_fulfill(3));
        assert!(!stock.can_fulfill(4));
    }

    #[test]
    fn test_stock_deserialize() {
        let stock: Stock = serde_json::from_str(r#"{"id":2,"amount":5}"#).unwrap();
        assert_eq!(stock, Stock::new(ProductId::new(2), 5));
    }
}
