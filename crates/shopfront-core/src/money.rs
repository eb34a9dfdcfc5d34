//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  A checkout that compares `balance >= total` on floats can reject a     │
//! │  customer who has exactly enough money.                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, balance and total is an i64 count of cents.             │
//! │    Comparisons and sums are exact.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Policy
//! Receipts print whole units, truncated toward zero (never rounded).
//! That policy lives in [`Money::truncated_units`] and is applied by the
//! renderer only.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let price = Money::from_units(100);
//! let line_total = price * 2;
//! assert_eq!(line_total.cents(), 20_000);
//! assert_eq!(Money::from_cents(41_199).truncated_units(), 411);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Cents in one whole currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a balance may go negative after an unchecked deduction
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: the shop runs in a single implicit currency
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.unit_price ──► CartItem.line_total
///                                                  │
/// Cart.shipping_cost ─────────────┐                ▼
///                                 └──────► Receipt.amount ──► Customer.deduct
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(150).cents(), 15_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit part, truncated toward zero.
    ///
    /// This is the receipt display policy: `411.99` prints as `411` and
    /// `-5.50` prints as `-5`. It is deliberately not rounding.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).truncated_units(), 10);
    /// assert_eq!(Money::from_cents(-550).truncated_units(), -5);
    /// ```
    #[inline]
    pub const fn truncated_units(&self) -> i64 {
        // Integer division in Rust truncates toward zero.
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_units(100);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_units(200));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies by a quantity, `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering with two decimals, e.g. `411.00`.
///
/// ## Note
/// Receipts do not use this; they print [`Money::truncated_units`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.truncated_units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
    fn test_from_units() {
        let money = Money::from_units(150);
        assert_eq!(money.cents(), 15_000);
        assert_eq!(money.truncated_units(), 150);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_truncation_is_not_rounding() {
        assert_eq!(Money::from_cents(41_199).truncated_units(), 411);
        assert_eq!(Money::from_cents(99).truncated_units(), 0);
        assert_eq!(Money::from_cents(-199).truncated_units(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut balance = Money::from_units(1000);
        balance -= Money::from_units(411);
        assert_eq!(balance, Money::from_units(589));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_units(200), Money::from_units(150), Money::from_units(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(400));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_negative_after_unchecked_deduction() {
        let mut balance = Money::from_units(10);
        balance -= Money::from_units(11);
        assert!(balance.is_negative());
        assert_eq!(balance.truncated_units(), -1);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_units(300);
        assert_eq!(price.checked_multiply_quantity(2), Some(Money::from_units(600)));
        assert_eq!(price.checked_multiply_quantity(i64::MAX), None);

        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
    }
}
