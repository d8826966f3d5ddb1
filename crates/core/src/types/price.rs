//! Minor-unit-free integer price type.
//!
//! The storefront deals in whole currency units only: prices are entered,
//! stored, and summed as plain integers, and display adds grouped digits
//! (`$20,000`). There are no decimals anywhere in the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing user-entered price input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is required")]
    Empty,
    #[error("price must be a whole number")]
    NotANumber,
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A price in whole currency units.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero price, used when a legacy card carries no readable price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the whole-unit amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Line total: unit price times a quantity. Saturates instead of
    /// wrapping; a cart will never legitimately get near `i64::MAX`.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Sum of two prices, saturating.
    #[must_use]
    pub const fn plus(&self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Parse user-entered price input.
    ///
    /// The contract is strict: after trimming, the input must be a bare
    /// positive integer. Decimals, grouping separators, and currency
    /// symbols are rejected rather than guessed at.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] when the input is empty, not a whole number,
    /// or not positive.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount: i64 = trimmed.parse().map_err(|_| PriceError::NotANumber)?;
        if amount <= 0 {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Grouped-digit rendering without the currency symbol (`20,000`).
    #[must_use]
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        let lead = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && i % 3 == lead % 3 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.grouped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Price::new(0).to_string(), "$0");
        assert_eq!(Price::new(999).to_string(), "$999");
        assert_eq!(Price::new(1000).to_string(), "$1,000");
        assert_eq!(Price::new(20000).to_string(), "$20,000");
        assert_eq!(Price::new(1_234_567).to_string(), "$1,234,567");
    }

    #[test]
    fn display_handles_negative_amounts() {
        // Negative prices never come from parse(), but Display must not
        // garble them if one is constructed directly.
        assert_eq!(Price::new(-4500).to_string(), "$-4,500");
    }

    #[test]
    fn parse_accepts_trimmed_integers() {
        assert_eq!(Price::parse(" 15000 "), Ok(Price::new(15000)));
        assert_eq!(Price::parse("1000"), Ok(Price::new(1000)));
    }

    #[test]
    fn parse_rejects_non_integer_or_nonpositive_input() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert_eq!(Price::parse("19.99"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("20,000"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("$500"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("-5"), Err(PriceError::NotPositive));
    }

    #[test]
    fn line_math_is_saturating() {
        assert_eq!(Price::new(20000).times(2), Price::new(40000));
        assert_eq!(Price::new(i64::MAX).times(2), Price::new(i64::MAX));
        assert_eq!(
            Price::new(i64::MAX).plus(Price::new(1)),
            Price::new(i64::MAX)
        );
    }
}
