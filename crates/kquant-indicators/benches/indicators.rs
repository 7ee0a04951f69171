//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kquant_core::types::{Bar, PriceSeries, Timeframe};
use kquant_indicators::{Ema, Indicator, Macd, Roc};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn generate_series(size: usize) -> PriceSeries {
    let mut series = PriceSeries::new("005930".to_string(), Timeframe::Daily);
    for (i, close) in generate_test_data(size).into_iter().enumerate() {
        series.push(Bar::new(
            (i as i64 + 1) * 86_400_000,
            close,
            close + 1.0,
            close - 1.0,
            close,
            1000.0,
        ));
    }
    series
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("span12", size), &data, |b, data| {
            let ema = Ema::new(12);
            b.iter(|| ema.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [1000, 10000, 100000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("table", size), &series, |b, series| {
            let macd = Macd::new();
            b.iter(|| macd.compute(black_box(series)))
        });
    }

    group.finish();
}

fn benchmark_roc(c: &mut Criterion) {
    let mut group = c.benchmark_group("ROC");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("period10", size), &data, |b, data| {
            let roc = Roc::new(10);
            b.iter(|| roc.calculate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ema, benchmark_macd, benchmark_roc);
criterion_main!(benches);
