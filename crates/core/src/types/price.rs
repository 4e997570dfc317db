//! Integer Rupiah price type.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole Rupiah.
///
/// The Rupiah has no minor unit in practice, so amounts are plain unsigned
/// integers. Display follows the Indonesian convention of grouping thousands
/// with dots: `Price::new(10_000)` renders as `Rp10.000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-Rupiah amount.
    #[must_use]
    pub const fn new(rupiah: u64) -> Self {
        Self(rupiah)
    }

    /// The amount in whole Rupiah.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Multiply the unit price by a quantity, saturating on overflow.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Format as `Rp` followed by the dot-grouped amount (id-ID locale).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "Rp{grouped}")
    }
}

impl From<u64> for Price {
    fn from(rupiah: u64) -> Self {
        Self(rupiah)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::new(0).to_string(), "Rp0");
        assert_eq!(Price::new(999).to_string(), "Rp999");
        assert_eq!(Price::new(1_000).to_string(), "Rp1.000");
        assert_eq!(Price::new(10_000).to_string(), "Rp10.000");
        assert_eq!(Price::new(1_250_000).to_string(), "Rp1.250.000");
    }

    #[test]
    fn test_times_and_sum() {
        let line = Price::new(10_000).times(3);
        assert_eq!(line, Price::new(30_000));

        let total: Price = [Price::new(5_000), Price::new(7_500)].into_iter().sum();
        assert_eq!(total.to_string(), "Rp12.500");
    }

    #[test]
    fn test_times_saturates() {
        let line = Price::new(u64::MAX).times(2);
        assert_eq!(line.amount(), u64::MAX);
    }

    #[test]
    fn test_serde_transparent() {
        let price: Price = serde_json::from_str("15000").expect("valid price");
        assert_eq!(price, Price::new(15_000));
        assert_eq!(serde_json::to_string(&price).expect("serialize"), "15000");
    }
}
