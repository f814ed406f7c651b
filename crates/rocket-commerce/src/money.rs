//! Money type for cart totals.
//!
//! The catalog publishes prices as decimal numbers in Brazilian reais. Totals
//! are accumulated in centavos so that summing many lines does not drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary value in Brazilian reais.
///
/// Amounts are stored in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in centavos.
    pub amount_cents: i64,
}

impl Money {
    /// Currency symbol used when displaying values.
    pub const SYMBOL: &'static str = "R$";

    /// Create a new Money value from centavos.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use rocket_commerce::money::Money;
    /// let price = Money::from_decimal(179.9);
    /// assert_eq!(price.amount_cents, 17990);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Format the way the storefront shows prices (e.g., "R$ 1.234,50").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        let whole = group_thousands(cents / 100);
        format!("{sign}{} {whole},{:02}", Self::SYMBOL, cents % 100)
    }
}

/// Insert `.` separators every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a catalog price for display.
pub fn format_price(price: f64) -> String {
    Money::from_decimal(price).display()
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
