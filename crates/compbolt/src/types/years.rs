//! Term length in years.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Length of the term in years. Fractional terms are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Years {
    value: Decimal,
}

impl Years {
    /// A zero-length term.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates a term, rejecting negative lengths.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeTerm { value });
        }
        Ok(Self { value })
    }

    /// Returns the term in years.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the term is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl TryFrom<Decimal> for Years {
    type Error = DomainError;

    fn try_from(value: Decimal) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Years> for Decimal {
    fn from(years: Years) -> Self {
        years.value
    }
}

impl fmt::Display for Years {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.value)
    }
}
