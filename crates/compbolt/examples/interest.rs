//! Compound interest example.
//!
//! Computes 1000 at 5% over 2 years for every supported compounding
//! frequency.
//!
//! Run with: cargo run -p compbolt --example interest

use compbolt::prelude::*;
use rust_decimal_macros::dec;

fn main() -> CompboltResult<()> {
    let principal = Principal::new(dec!(1000))?;
    let rate_percent = RatePercent::new(dec!(5.0))?;
    let years = Years::new(dec!(2))?;

    println!("Principal {principal} at {rate_percent} for {years}");
    for frequency in CompoundingFrequency::ALL {
        let amount = calculate_compound_interest(principal, rate_percent, years, frequency)?;
        println!("  {frequency}: {}", amount.round_dp(9));
    }

    Ok(())
}
