//! Catalog identifiers.
//!
//! The catalog service keys products by plain integers. Wrapping them in a
//! newtype keeps a product id from being confused with an amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog key of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a new ID from its numeric catalog key.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric catalog key.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_parse() {
        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
    }
}
