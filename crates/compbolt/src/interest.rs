//! Compound interest calculation.
//!
//! Computes `A = P × (1 + r/n)^(n × t)` in `Decimal` arithmetic. Integer
//! exponents are evaluated by repeated squaring; a fractional remainder of
//! the exponent goes through `exp(f × ln(base))`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, CalculationResult};
use crate::types::{CompoundingFrequency, Principal, RatePercent, Years};

/// Computes the compounded amount, unrounded.
///
/// Each argument has its own validated type, so inputs cannot be passed in
/// the wrong position or bypass their invariants.
///
/// # Errors
///
/// Returns [`CalculationError::Overflow`] if the amount exceeds the range of
/// `Decimal`.
///
/// # Example
///
/// ```rust
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let amount = calculate_compound_interest(
///     Principal::new(dec!(1000))?,
///     RatePercent::new(dec!(5.0))?,
///     Years::new(dec!(2))?,
///     CompoundingFrequency::Annual,
/// )?;
/// assert_eq!(amount, dec!(1102.5));
/// # Ok::<(), CompboltError>(())
/// ```
///
/// A rate in the principal position does not compile:
///
/// ```compile_fail
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let _ = calculate_compound_interest(
///     RatePercent::new(dec!(5))?,
///     RatePercent::new(dec!(5))?,
///     Years::new(dec!(2))?,
///     CompoundingFrequency::Annual,
/// );
/// # Ok::<(), CompboltError>(())
/// ```
///
/// Nor does a principal in the rate position:
///
/// ```compile_fail
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let _ = calculate_compound_interest(
///     Principal::new(dec!(1000))?,
///     Principal::new(dec!(1000))?,
///     Years::new(dec!(2))?,
///     CompoundingFrequency::Annual,
/// );
/// # Ok::<(), CompboltError>(())
/// ```
///
/// Nor a raw decimal in place of the term:
///
/// ```compile_fail
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let _ = calculate_compound_interest(
///     Principal::new(dec!(1000))?,
///     RatePercent::new(dec!(5))?,
///     dec!(2),
///     CompoundingFrequency::Annual,
/// );
/// # Ok::<(), CompboltError>(())
/// ```
///
/// Nor a bare integer in place of the frequency:
///
/// ```compile_fail
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let _ = calculate_compound_interest(
///     Principal::new(dec!(1000))?,
///     RatePercent::new(dec!(5))?,
///     Years::new(dec!(2))?,
///     12u32,
/// );
/// # Ok::<(), CompboltError>(())
/// ```
pub fn calculate_compound_interest(
    principal: Principal,
    rate_percent: RatePercent,
    years: Years,
    frequency: CompoundingFrequency,
) -> CalculationResult<Decimal> {
    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if rate_percent.is_zero() || years.is_zero() {
        return Ok(principal.value());
    }

    let n = Decimal::from(frequency.periods_per_year());
    let base = Decimal::ONE + rate_percent.as_fraction() / n;
    // r/n below the decimal resolution leaves nothing to compound
    if base == Decimal::ONE {
        return Ok(principal.value());
    }

    let exponent = compounding_periods(years, frequency)?;
    let growth = growth_factor(base, exponent)?;

    principal
        .value()
        .checked_mul(growth)
        .ok_or_else(|| CalculationError::overflow("compounded amount"))
}

/// Total number of compounding periods, `n × t`.
fn compounding_periods(
    years: Years,
    frequency: CompoundingFrequency,
) -> CalculationResult<Decimal> {
    Decimal::from(frequency.periods_per_year())
        .checked_mul(years.value())
        .ok_or_else(|| CalculationError::overflow("period count"))
}

/// `base^exponent` for `base > 1` and `exponent >= 0`.
fn growth_factor(base: Decimal, exponent: Decimal) -> CalculationResult<Decimal> {
    let whole = exponent.trunc();
    let fraction = exponent - whole;

    let mut growth = match whole.to_u64() {
        Some(periods) => powu_by_squaring(base, periods),
        None => {
            log::trace!("period count {whole} exceeds u64, using exp(ln) path");
            base.checked_ln()
                .and_then(|ln| ln.checked_mul(whole))
                .and_then(|x| x.checked_exp())
        }
    }
    .ok_or_else(|| CalculationError::overflow("growth factor"))?;

    if !fraction.is_zero() {
        log::trace!("fractional period {fraction} compounded via exp(ln)");
        let partial = base
            .checked_powd(fraction)
            .ok_or_else(|| CalculationError::overflow("fractional period growth"))?;
        growth = growth
            .checked_mul(partial)
            .ok_or_else(|| CalculationError::overflow("growth factor"))?;
    }

    Ok(growth)
}

/// Exponentiation by squaring. `None` on overflow.
fn powu_by_squaring(base: Decimal, mut exp: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        exp >>= 1;
        if exp > 0 {
            square = square.checked_mul(square)?;
        }
    }
    Some(result)
}

/// A compound interest calculation with its inputs named.
///
/// # Example
///
/// ```rust
/// use compbolt::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let calc = CompoundInterest {
///     principal: Principal::new(dec!(1000))?,
///     rate_percent: RatePercent::new(dec!(100))?,
///     years: Years::new(dec!(2))?,
///     frequency: CompoundingFrequency::Annual,
/// };
/// assert_eq!(calc.amount()?, dec!(4000));
/// assert_eq!(calc.interest()?, dec!(3000));
/// # Ok::<(), CompboltError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundInterest {
    /// Initial sum.
    pub principal: Principal,
    /// Nominal annual rate as a percentage.
    pub rate_percent: RatePercent,
    /// Term length.
    pub years: Years,
    /// Compounding periods per year.
    pub frequency: CompoundingFrequency,
}

impl CompoundInterest {
    /// Compounded amount at the end of the term. See [`calculate_compound_interest`].
    pub fn amount(&self) -> CalculationResult<Decimal> {
        calculate_compound_interest(self.principal, self.rate_percent, self.years, self.frequency)
    }

    /// Interest earned over the term (amount minus principal).
    pub fn interest(&self) -> CalculationResult<Decimal> {
        Ok(self.amount()? - self.principal.value())
    }

    /// Total number of compounding periods over the term.
    pub fn periods(&self) -> CalculationResult<Decimal> {
        compounding_periods(self.years, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calc(
        principal: Decimal,
        rate: Decimal,
        years: Decimal,
        frequency: CompoundingFrequency,
    ) -> Decimal {
        calculate_compound_interest(
            Principal::new(principal).unwrap(),
            RatePercent::new(rate).unwrap(),
            Years::new(years).unwrap(),
            frequency,
        )
        .unwrap()
    }

    #[test]
    fn test_annual_two_years() {
        let result = calc(dec!(1000), dec!(5.0), dec!(2), CompoundingFrequency::Annual);
        assert_eq!(result.round_dp(9), dec!(1102.5));
    }

    #[test]
    fn test_each_frequency() {
        let cases = [
            (CompoundingFrequency::Annual, dec!(1102.5)),
            (CompoundingFrequency::SemiAnnual, dec!(1103.812890625)),
            (CompoundingFrequency::Quarterly, dec!(1104.486101181)),
            (CompoundingFrequency::Monthly, dec!(1104.941335558)),
        ];
        for (frequency, expected) in cases {
            let result = calc(dec!(1000), dec!(5.0), dec!(2), frequency);
            assert_eq!(result.round_dp(9), expected, "{frequency}");
        }
    }

    #[test]
    fn test_twenty_years() {
        let result = calc(dec!(1000), dec!(5.0), dec!(20), CompoundingFrequency::Annual);
        assert_eq!(result.round_dp(9), dec!(2653.297705144));
    }

    #[test]
    fn test_rate_hundred_is_not_clamped() {
        let result = calc(dec!(1000), dec!(100.0), dec!(2), CompoundingFrequency::Annual);
        assert_eq!(result.round_dp(9), dec!(4000));
    }

    #[test]
    fn test_zero_principal() {
        for frequency in CompoundingFrequency::ALL {
            assert_eq!(calc(dec!(0), dec!(5.0), dec!(2), frequency), Decimal::ZERO);
        }
    }

    #[test]
    fn test_zero_rate_and_zero_term_return_principal() {
        for frequency in CompoundingFrequency::ALL {
            assert_eq!(calc(dec!(1000), dec!(0.0), dec!(2), frequency), dec!(1000));
            assert_eq!(calc(dec!(1000), dec!(5.0), dec!(0), frequency), dec!(1000));
        }
    }

    #[test]
    fn test_zero_rate_with_huge_term() {
        let result = calc(dec!(1000), dec!(0), Decimal::MAX, CompoundingFrequency::Monthly);
        assert_eq!(result, dec!(1000));
    }

    #[test]
    fn test_rate_below_resolution_with_huge_term() {
        // 1e-28 / 4 and 1e-28 / 12 round to zero at 28 decimal places
        let rate = Decimal::new(1, 26);
        for frequency in [CompoundingFrequency::Quarterly, CompoundingFrequency::Monthly] {
            assert_eq!(calc(dec!(1000), rate, Decimal::MAX, frequency), dec!(1000));
        }
    }

    #[test]
    fn test_fractional_exponent() {
        // 1.1025 * 1.05^0.5 = 1.12972632194704...
        let result = calc(dec!(1000), dec!(5.0), dec!(2.5), CompoundingFrequency::Annual);
        assert_eq!(result.round_dp(4), dec!(1129.7263));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = calculate_compound_interest(
            Principal::new(dec!(1000)).unwrap(),
            RatePercent::new(dec!(100)).unwrap(),
            Years::new(dec!(1000)).unwrap(),
            CompoundingFrequency::Annual,
        );
        assert!(matches!(result, Err(CalculationError::Overflow { .. })));
    }

    #[test]
    fn test_powu_by_squaring() {
        assert_eq!(powu_by_squaring(dec!(2), 0), Some(Decimal::ONE));
        assert_eq!(powu_by_squaring(dec!(2), 10), Some(dec!(1024)));
        assert_eq!(powu_by_squaring(dec!(1.1), 3), Some(dec!(1.331)));
        assert_eq!(powu_by_squaring(dec!(10), 40), None);
    }

    #[test]
    fn test_named_inputs() {
        let calc = CompoundInterest {
            principal: Principal::new(dec!(1000)).unwrap(),
            rate_percent: RatePercent::new(dec!(5.0)).unwrap(),
            years: Years::new(dec!(2)).unwrap(),
            frequency: CompoundingFrequency::Monthly,
        };
        assert_eq!(calc.periods().unwrap(), dec!(24));
        assert_eq!(calc.interest().unwrap().round_dp(9), dec!(104.941335558));
    }
}
