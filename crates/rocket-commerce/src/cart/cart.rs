//! Cart collection and its transitions.
//!
//! Transitions never mutate in place: each returns a new [`Cart`] or an error,
//! leaving the original untouched. The store relies on this to commit a
//! snapshot only once every check has passed.

use crate::catalog::{CatalogEntry, Product, Stock};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A shopping cart: an ordered list of line items, at most one per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted line items.
    ///
    /// Lines with an amount below 1 are dropped, and so are repeated ids
    /// (the first occurrence wins).
    pub fn restore(items: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| item.amount >= 1 && seen.insert(item.id))
            .collect();
        Self { items }
    }

    /// Line items in cart order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Get a line item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Check if the product has a line in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Cart with one more unit of a product already present.
    pub fn incremented(&self, product_id: ProductId, stock: &Stock) -> Result<Cart, CartError> {
        let existing = self
            .get(product_id)
            .ok_or(CartError::ItemNotInCart(product_id))?;

        let new_amount = existing
            .amount
            .checked_add(1)
            .ok_or(CartError::Overflow)?;

        self.replace_amount(product_id, new_amount, stock)
    }

    /// Cart with a new line for a catalog entry, starting at one unit.
    pub fn with_new_line(&self, entry: CatalogEntry) -> Result<Cart, CartError> {
        if self.contains(entry.id) {
            return Err(CartError::ItemAlreadyInCart(entry.id));
        }

        let mut items = self.items.clone();
        items.push(entry.into_line(1));
        Ok(Self { items })
    }

    /// Cart without the line for a product.
    pub fn without(&self, product_id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(product_id) {
            return Err(CartError::ItemNotInCart(product_id));
        }

        let items = self
            .items
            .iter()
            .filter(|i| i.id != product_id)
            .cloned()
            .collect();
        Ok(Self { items })
    }

    /// Check the parts of an amount update that need no stock lookup.
    ///
    /// The line must exist and the amount must be at least 1, checked in that
    /// order.
    pub fn validate_amount(&self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        if !self.contains(product_id) {
            return Err(CartError::ItemNotInCart(product_id));
        }
        if amount < 1 {
            return Err(CartError::InvalidAmount(amount));
        }
        Ok(())
    }

    /// Cart with a line's amount set to exactly `amount`.
    pub fn with_amount(
        &self,
        product_id: ProductId,
        amount: i64,
        stock: &Stock,
    ) -> Result<Cart, CartError> {
        self.validate_amount(product_id, amount)?;
        self.replace_amount(product_id, amount, stock)
    }

    fn replace_amount(
        &self,
        product_id: ProductId,
        amount: i64,
        stock: &Stock,
    ) -> Result<Cart, CartError> {
        if !stock.can_fulfill(amount) {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let items = self
            .items
            .iter()
            .map(|i| {
                if i.id == product_id {
                    i.with_amount(amount)
                } else {
                    i.clone()
                }
            })
            .collect();
        Ok(Self { items })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, price: f64) -> CatalogEntry {
        CatalogEntry {
            id: ProductId::new(id),
            title: format!("Tênis {id}"),
            price,
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    fn stock(id: u64, amount: i64) -> Stock {
        Stock::new(ProductId::new(id), amount)
    }

    fn cart_with(lines: &[(u64, i64)]) -> Cart {
        Cart::restore(
            lines
                .iter()
                .map(|&(id, amount)| entry(id, 100.0).into_line(amount))
                .collect(),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_with_new_line() {
        let cart = Cart::new().with_new_line(entry(1, 179.9)).unwrap();
        assert_eq!(cart.len(), 1);
        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.amount, 1);
        assert_eq!(line.price, 179.9);
    }

    #[test]
    fn test_with_new_line_rejects_duplicate() {
        let cart = cart_with(&[(1, 1)]);
        let err = cart.with_new_line(entry(1, 100.0)).unwrap_err();
        assert_eq!(err, CartError::ItemAlreadyInCart(ProductId::new(1)));
    }

    #[test]
    fn test_incremented_within_stock() {
        let cart = cart_with(&[(1, 1), (2, 1)]);
        let next = cart.incremented(ProductId::new(1), &stock(1, 5)).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next.get(ProductId::new(1)).unwrap().amount, 2);
        // original untouched
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_incremented_beyond_stock() {
        let cart = cart_with(&[(1, 1)]);
        let err = cart.incremented(ProductId::new(1), &stock(1, 1)).unwrap_err();
        assert!(err.is_out_of_stock());
    }

    #[test]
    fn test_incremented_missing_line() {
        let err = Cart::new()
            .incremented(ProductId::new(9), &stock(9, 5))
            .unwrap_err();
        assert_eq!(err, CartError::ItemNotInCart(ProductId::new(9)));
    }

    #[test]
    fn test_without() {
        let cart = cart_with(&[(1, 1), (2, 3), (3, 1)]);
        let next = cart.without(ProductId::new(2)).unwrap();

        assert_eq!(next.len(), 2);
        assert!(!next.contains(ProductId::new(2)));
        let ids: Vec<u64> = next.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_without_missing_line() {
        let cart = cart_with(&[(1, 1)]);
        assert!(cart.without(ProductId::new(2)).is_err());
    }

    #[test]
    fn test_validate_amount_order() {
        let cart = cart_with(&[(1, 2)]);
        // missing line is reported before the bad amount
        assert_eq!(
            cart.validate_amount(ProductId::new(5), 0).unwrap_err(),
            CartError::ItemNotInCart(ProductId::new(5))
        );
        assert_eq!(
            cart.validate_amount(ProductId::new(1), 0).unwrap_err(),
            CartError::InvalidAmount(0)
        );
        assert_eq!(
            cart.validate_amount(ProductId::new(1), -3).unwrap_err(),
            CartError::InvalidAmount(-3)
        );
        assert!(cart.validate_amount(ProductId::new(1), 1).is_ok());
    }

    #[test]
    fn test_with_amount() {
        let cart = cart_with(&[(1, 1), (2, 1)]);
        let next = cart
            .with_amount(ProductId::new(2), 4, &stock(2, 4))
            .unwrap();

        assert_eq!(next.get(ProductId::new(2)).unwrap().amount, 4);
        assert_eq!(next.get(ProductId::new(1)), cart.get(ProductId::new(1)));
        assert_eq!(next.items()[1].id, ProductId::new(2));
    }

    #[test]
    fn test_with_amount_beyond_stock() {
        let cart = cart_with(&[(1, 1)]);
        let err = cart
            .with_amount(ProductId::new(1), 5, &stock(1, 4))
            .unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                product_id: ProductId::new(1),
                requested: 5,
                available: 4,
            }
        );
    }

    #[test]
    fn test_restore_drops_invalid_lines() {
        let items = vec![
            entry(1, 10.0).into_line(2),
            entry(2, 10.0).into_line(0),
            entry(1, 10.0).into_line(7),
            entry(3, 10.0).into_line(1),
        ];
        let cart = Cart::restore(items);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 2);
        assert!(cart.contains(ProductId::new(3)));
    }

    #[test]
    fn test_totals() {
        let cart = Cart::restore(vec![
            entry(1, 179.9).into_line(2),
            entry(2, 139.9).into_line(1),
        ]);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().amount_cents, 2 * 17990 + 13990);
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = cart_with(&[(1, 2)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));

        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
