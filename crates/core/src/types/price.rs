//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a [`Price`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Input was empty.
    #[error("Price is required")]
    Missing,

    /// Input could not be parsed as a decimal number.
    #[error("Invalid price: {0}")]
    Invalid(String),

    /// Parsed amount was negative.
    #[error("Price must not be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative product price.
///
/// Prices come from form input as text and from the remote store as JSON
/// numbers; both paths go through the non-negative check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Parse a price from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Missing`] for empty input,
    /// [`PriceError::Invalid`] when the text is not a decimal number, and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Missing);
        }
        let amount: Decimal = trimmed
            .parse()
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
        Self::new(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
