//! # Money Module
//!
//! Provides the `Money` and `TaxRate` types for handling prices and VAT.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored in minor units (cents, grosze, ...)                 │
//! │                                                                         │
//! │    2400 minor units at +8% VAT = 2592   (exact, no float involved)     │
//! │     900 minor units at +23% VAT = 1107                                 │
//! │                                                                         │
//! │  Every total in the cart is a sum of integers.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::{Money, TaxRate};
//!
//! let price = Money::from_cents(2400);
//! assert_eq!(price.with_tax(TaxRate::from_bps(800)).cents(), 2592);
//! assert_eq!((price * 2).cents(), 4800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8% and 2300 bps = 23%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Serializes as a bare integer, so a cart summary reads
/// `"total": 4200` rather than a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Returns this value with tax added, rounded to a whole minor unit.
    ///
    /// This is `round(amount * (1 + rate))`, computed in one integer step so
    /// the rounding happens exactly once. Product prices are capped at
    /// [`MAX_PRICE_CENTS`](crate::MAX_PRICE_CENTS), which keeps the result
    /// well inside `i64`.
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        let gross = (self.0 as i128 * (10000 + rate.bps() as i128) + 5000) / 10000;
        Money::from_cents(gross as i64)
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering: `2592` → `25.92`. No currency symbol, the core
/// is currency-agnostic.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2592).to_string(), "25.92");
        assert_eq!(Money::from_cents(900).to_string(), "9.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_with_tax_matches_fixture_rates() {
        assert_eq!(Money::from_cents(2400).with_tax(TaxRate::from_bps(800)).cents(), 2592);
        assert_eq!(Money::from_cents(2800).with_tax(TaxRate::from_bps(800)).cents(), 3024);
        assert_eq!(Money::from_cents(900).with_tax(TaxRate::from_bps(2300)).cents(), 1107);
    }

    #[test]
    fn test_with_tax_rounds_half_up() {
        // 1050 * 1.05 = 1102.5
        assert_eq!(Money::from_cents(1050).with_tax(TaxRate::from_bps(500)).cents(), 1103);
        // 1010 * 1.08 = 1090.8
        assert_eq!(Money::from_cents(1010).with_tax(TaxRate::from_bps(800)).cents(), 1091);
        // 1001 * 1.08 = 1081.08
        assert_eq!(Money::from_cents(1001).with_tax(TaxRate::from_bps(800)).cents(), 1081);
    }

    #[test]
    fn test_with_zero_rate_is_identity() {
        let price = Money::from_cents(1999);
        assert_eq!(price.with_tax(TaxRate::from_bps(0)), price);
    }

    #[test]
    fn test_with_tax_at_price_cap() {
        let price = Money::from_cents(crate::MAX_PRICE_CENTS);
        let gross = price.with_tax(TaxRate::from_bps(2300));
        assert_eq!(gross.cents(), crate::MAX_PRICE_CENTS / 100 * 123);
        assert!(gross > price);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(2400);
        let b = Money::from_cents(900);

        assert_eq!((a + b).cents(), 3300);
        assert_eq!((b * 2).cents(), 1800);

        let total: Money = vec![a, b * 2].into_iter().sum();
        assert_eq!(total.cents(), 4200);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(4806)).unwrap();
        assert_eq!(json, "4806");
        let rate = serde_json::to_string(&TaxRate::from_bps(800)).unwrap();
        assert_eq!(rate, "800");
    }
}
