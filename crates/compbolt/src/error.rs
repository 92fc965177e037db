//! Error types for compbolt.
//!
//! Construction of a value type fails with [`DomainError`]; the calculator
//! itself can only fail with [`CalculationError`] when the result leaves the
//! representable decimal range.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result of constructing a validated value type.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result of running the interest calculation.
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Result for callers that construct and calculate in one chain.
pub type CompboltResult<T> = Result<T, CompboltError>;

/// A raw input violated the invariant of the type it was meant to become.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Principal below zero.
    #[error("negative principal: {value}")]
    NegativePrincipal {
        /// The rejected value.
        value: Decimal,
    },

    /// Rate percentage below zero.
    #[error("negative rate: {value}")]
    NegativeRate {
        /// The rejected value.
        value: Decimal,
    },

    /// Rate percentage above 100.
    #[error("rate exceeds 100: {value}")]
    RateExceedsHundred {
        /// The rejected value.
        value: Decimal,
    },

    /// Term below zero.
    #[error("negative term: {value}")]
    NegativeTerm {
        /// The rejected value.
        value: Decimal,
    },

    /// Periods-per-year count that is not one of the supported frequencies.
    #[error("unsupported compounding frequency: {periods} periods per year")]
    UnsupportedFrequency {
        /// The rejected periods-per-year count.
        periods: u32,
    },
}

/// Failure while evaluating the compound interest formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// An intermediate or the final amount exceeded the decimal range.
    #[error("decimal overflow while computing {stage}")]
    Overflow {
        /// Which part of the formula overflowed.
        stage: &'static str,
    },
}

impl CalculationError {
    /// Creates an overflow error for the given formula stage.
    #[must_use]
    pub fn overflow(stage: &'static str) -> Self {
        Self::Overflow { stage }
    }
}

/// Any error compbolt can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompboltError {
    /// Invalid input value.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Calculation failure.
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
