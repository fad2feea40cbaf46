//! Benchmarks for seat pricing and sensitivity sweeps.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{Criterion, criterion_group, criterion_main};
use flight_pricing::application::services::SensitivityAnalyzer;
use flight_pricing::domain::services::PricingEngine;
use flight_pricing::domain::value_objects::{PricingInputs, SweepKind};
use std::hint::black_box;

fn bench_evaluate(c: &mut Criterion) {
    let engine = PricingEngine::new();
    let inputs = PricingInputs::default();

    let mut group = c.benchmark_group("pricing_engine");
    group.bench_function("calculate_price", |b| {
        b.iter(|| engine.calculate_price(black_box(&inputs)).unwrap());
    });
    group.bench_function("evaluate", |b| {
        b.iter(|| engine.evaluate(black_box(&inputs)).unwrap());
    });
    group.bench_function("explain", |b| {
        b.iter(|| engine.explain(black_box(&inputs)).unwrap());
    });
    group.finish();
}

fn bench_sweeps(c: &mut Criterion) {
    let analyzer = SensitivityAnalyzer::standard();
    let inputs = PricingInputs::default().with_total_seats(400).with_seats_filled(120);

    let mut group = c.benchmark_group("sensitivity");
    for kind in SweepKind::ALL {
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| analyzer.sweep(black_box(&inputs), kind).unwrap());
        });
    }
    group.bench_function("all", |b| {
        b.iter(|| analyzer.all(black_box(&inputs)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_sweeps);
criterion_main!(benches);
