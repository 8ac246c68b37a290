//! # Totals
//!
//! Provides the `Totals` type: the price and calorie sums of a set of products.
//!
//! ## Usage
//! ```rust
//! use kiosk_core::nutrition::Totals;
//!
//! let lunch = Totals::new(60, 40) + Totals::new(80, 20);
//! assert_eq!(lunch, Totals::new(140, 60));
//!
//! let nothing: Totals = Vec::<Totals>::new().into_iter().sum();
//! assert!(nothing.is_zero());
//! ```
//!
//! Prices are plain non-negative integers; no currency is attached.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::product::Product;

// =============================================================================
// Totals Type
// =============================================================================

/// Aggregated price and calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Totals {
    pub price: u32,
    pub calories: u32,
}

impl Totals {
    #[inline]
    pub const fn new(price: u32, calories: u32) -> Self {
        Totals { price, calories }
    }

    /// Zero price, zero calories.
    #[inline]
    pub const fn zero() -> Self {
        Totals::new(0, 0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.price == 0 && self.calories == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl From<&Product> for Totals {
    fn from(product: &Product) -> Self {
        Totals::new(product.price(), product.calories())
    }
}

impl Add for Totals {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Totals::new(self.price + other.price, self.calories + other.calories)
    }
}

impl AddAssign for Totals {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.price += other.price;
        self.calories += other.calories;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Product> for Totals {
    fn sum<I: Iterator<Item = &'a Product>>(iter: I) -> Self {
        iter.map(Totals::from).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
