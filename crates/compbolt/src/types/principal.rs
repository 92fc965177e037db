//! Principal sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// The initial sum on which interest accrues.
///
/// Always non-negative. There is no upper bound.
///
/// # Example
///
/// ```rust
/// use compbolt::types::Principal;
/// use rust_decimal_macros::dec;
///
/// let principal = Principal::new(dec!(1000)).unwrap();
/// assert_eq!(principal.value(), dec!(1000));
/// assert!(Principal::new(dec!(-0.1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Principal {
    value: Decimal,
}

impl Principal {
    /// A principal of zero.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates a principal, rejecting negative amounts.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::NegativePrincipal { value });
        }
        Ok(Self { value })
    }

    /// Returns the wrapped amount.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the principal is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl TryFrom<Decimal> for Principal {
    type Error = DomainError;

    fn try_from(value: Decimal) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Principal> for Decimal {
    fn from(principal: Principal) -> Self {
        principal.value
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
