//! Benchmarks for the compound interest calculation.
//!
//! Run with: cargo bench -p compbolt

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::hint::black_box;

use compbolt::{CompoundInterest, CompoundingFrequency, Principal, RatePercent, Years};

fn calculation(years: Decimal, frequency: CompoundingFrequency) -> CompoundInterest {
    CompoundInterest {
        principal: Principal::new(dec!(1000)).unwrap(),
        rate_percent: RatePercent::new(dec!(5.0)).unwrap(),
        years: Years::new(years).unwrap(),
        frequency,
    }
}

fn bench_integer_periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_periods");

    for frequency in CompoundingFrequency::ALL {
        let calc = calculation(dec!(30), frequency);
        group.bench_with_input(
            BenchmarkId::from_parameter(frequency),
            &calc,
            |b, calc| b.iter(|| black_box(calc).amount()),
        );
    }

    group.finish();
}

fn bench_fractional_periods(c: &mut Criterion) {
    let calc = calculation(dec!(7.625), CompoundingFrequency::Quarterly);
    c.bench_function("fractional_periods", |b| b.iter(|| black_box(&calc).amount()));
}

criterion_group!(benches, bench_integer_periods, bench_fractional_periods);
criterion_main!(benches);
