//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are exact decimals (`rust_decimal::Decimal`), so cart totals never
//! accumulate floating-point drift no matter how many add/remove cycles run.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's single display currency.
///
/// The currency suffix (e.g. `ج.م`) is configuration, not part of the value;
/// see `StoreConfig` in the widget crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Fixed two-decimal rendering for panel display (e.g. `10000.00`).
    #[must_use]
    pub fn display_fixed(&self) -> String {
        format!("{:.2}", self.0)
    }

    /// Short rendering with trailing zeros trimmed (e.g. `605`, `12.5`).
    ///
    /// This is the form embedded in composed order messages.
    #[must_use]
    pub fn display_short(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::new(s.parse::<Decimal>().unwrap())
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [price("300").times(2), price("5").times(1)].iter().sum();
        assert_eq!(total, price("605"));
    }

    #[test]
    fn test_display_fixed_pads_to_two_decimals() {
        assert_eq!(price("10000").display_fixed(), "10000.00");
        assert_eq!(price("12.5").display_fixed(), "12.50");
    }

    #[test]
    fn test_display_short_trims_trailing_zeros() {
        assert_eq!(price("605.00").display_short(), "605");
        assert_eq!(price("12.50").display_short(), "12.5");
        assert_eq!(Price::ZERO.display_short(), "0");
    }

    #[test]
    fn test_no_drift_over_many_cycles() {
        // 0.10 is the classic binary-float repeating fraction
        let unit = price("0.10");
        let mut total = Price::ZERO;
        for _ in 0..1000 {
            total += unit;
        }
        assert_eq!(total, price("100"));
    }

    #[test]
    fn test_deserializes_from_json_numbers() {
        let p: Price = serde_json::from_str("5000").unwrap();
        assert_eq!(p, price("5000"));
    }
}
