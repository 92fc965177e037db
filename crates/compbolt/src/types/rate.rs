//! Nominal annual rate as a percentage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// A nominal annual interest rate quoted as a percentage (5.0 = 5%).
///
/// Bounded to `0..=100`.
///
/// # Example
///
/// ```rust
/// use compbolt::types::RatePercent;
/// use rust_decimal_macros::dec;
///
/// let rate = RatePercent::new(dec!(5.0)).unwrap();
/// assert_eq!(rate.as_fraction(), dec!(0.05));
/// assert!(RatePercent::new(dec!(100.1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct RatePercent {
    /// Rate as a percentage (e.g., 5.0 for 5%)
    value: Decimal,
}

impl RatePercent {
    /// A rate of zero percent.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates a rate from a percentage between 0 and 100 inclusive.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeRate { value });
        }
        if value > Decimal::ONE_HUNDRED {
            return Err(DomainError::RateExceedsHundred { value });
        }
        Ok(Self { value })
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a fraction (percentage / 100).
    #[must_use]
    pub fn as_fraction(&self) -> Decimal {
        self.value / Decimal::ONE_HUNDRED
    }

    /// Returns true if the rate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl TryFrom<Decimal> for RatePercent {
    type Error = DomainError;

    fn try_from(value: Decimal) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<RatePercent> for Decimal {
    fn from(rate: RatePercent) -> Self {
        rate.value
    }
}

impl fmt::Display for RatePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}
