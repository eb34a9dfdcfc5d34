//! # Weight Module
//!
//! Shipping weights as an integer count of grams.
//!
//! Like [`Money`](crate::money::Money), weights avoid floating point: a
//! `0.2kg` cheese is `Weight::from_grams(200)` and two of them are exactly
//! `400g`. The shipment notice prints per-line grams and a package total in
//! kilograms with one decimal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Grams in one kilogram.
pub const GRAMS_PER_KG: i64 = 1000;

/// A weight in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from grams.
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Creates a weight from whole kilograms.
    #[inline]
    pub const fn from_kilograms(kg: i64) -> Self {
        Weight(kg * GRAMS_PER_KG)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Checks if the weight is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, `None` on overflow.
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    /// Adds two weights, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Weight) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    /// Returns the weight in tenths of a kilogram, rounding half up.
    ///
    /// `1100g` is `11` (printed `1.1kg`), `1050g` is `11`, `1049g` is `10`.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_grams(1100).tenths_of_kg(), 11);
    /// assert_eq!(Weight::from_grams(1049).tenths_of_kg(), 10);
    /// ```
    pub const fn tenths_of_kg(&self) -> i64 {
        let step = GRAMS_PER_KG / 10;
        (self.0 + step / 2).div_euclid(step)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::zero()
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Weight {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Weight(self.0 * qty)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}
