//! # compbolt
//!
//! Compound interest in exact decimal arithmetic.
//!
//! - **Types**: validated inputs [`Principal`], [`RatePercent`], [`Years`] and
//!   the closed [`CompoundingFrequency`] set
//! - **Calculator**: [`calculate_compound_interest`] and its named-input form
//!   [`CompoundInterest`]
//!
//! Invariants are checked once, when a value type is constructed. The
//! calculator takes those types directly and never re-validates.
//!
//! ## Example
//!
//! ```rust
//! use compbolt::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let amount = CompoundInterest {
//!     principal: Principal::new(dec!(1000))?,
//!     rate_percent: RatePercent::new(dec!(5.0))?,
//!     years: Years::new(dec!(2))?,
//!     frequency: CompoundingFrequency::Monthly,
//! }
//! .amount()?;
//!
//! assert_eq!(amount.round_dp(9), dec!(1104.941335558));
//! # Ok::<(), CompboltError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::needless_pass_by_value)]

pub mod error;
pub mod interest;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{
        CalculationError, CalculationResult, CompboltError, CompboltResult, DomainError,
        DomainResult,
    };
    pub use crate::interest::{calculate_compound_interest, CompoundInterest};
    pub use crate::types::{CompoundingFrequency, Principal, RatePercent, Years};
}

// Re-export commonly used types at crate root
pub use error::{CalculationError, CompboltError, CompboltResult, DomainError};
pub use interest::{calculate_compound_interest, CompoundInterest};
pub use types::{CompoundingFrequency, Principal, RatePercent, Years};
