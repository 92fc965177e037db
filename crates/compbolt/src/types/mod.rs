//! Validated inputs to the interest calculation.
//!
//! - [`Principal`]: initial sum, non-negative
//! - [`RatePercent`]: nominal annual rate as a percentage, `0..=100`
//! - [`Years`]: term length, non-negative, fractional allowed
//! - [`CompoundingFrequency`]: periods per year, one of a closed set
//!
//! Each type checks its invariant once in its constructor and is immutable
//! afterwards.

mod frequency;
mod principal;
mod rate;
mod years;

pub use frequency::CompoundingFrequency;
pub use principal::Principal;
pub use rate::RatePercent;
pub use years::Years;
