//! Money type for catalogue prices.
//!
//! Prices arrive as decimal numbers (`39.99`) but are held as integer
//! cents, so bucket boundaries such as "50 up to and including 100" compare
//! exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in the catalogue's single currency.
///
/// Stored in minor units (cents). Serialises as a decimal number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(from = "f64", into = "f64")]
pub struct Money {
    /// Amount in minor units (cents).
    pub amount_cents: i64,
}

impl Money {
    /// Create a price from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a price from whole currency units.
    pub const fn whole(units: i64) -> Self {
        Self::new(units * 100)
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use shelf_catalog::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Get the amount as a decimal number.
    pub fn as_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format for display with the given currency symbol (e.g., "39.99 €").
    pub fn display(&self, symbol: &str) -> String {
        format!("{} {}", self, symbol)
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.as_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(39.99).amount_cents, 3999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
        assert_eq!(Money::whole(50), Money::new(5000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(3999).to_string(), "39.99");
        assert_eq!(Money::new(5).to_string(), "0.05");
        assert_eq!(Money::new(-250).to_string(), "-2.50");
        assert_eq!(Money::new(12000).display("€"), "120.00 €");
    }

    #[test]
    fn test_serde_decimal() {
        let m: Money = serde_json::from_str("59.99").unwrap();
        assert_eq!(m, Money::new(5999));
        assert_eq!(serde_json::to_string(&Money::new(100)).unwrap(), "1.0");
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_decimal(49.99) < Money::whole(50));
        assert!(!Money::zero().is_negative());
    }
}
