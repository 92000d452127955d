//! Benchmarks for weatherstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use weatherstats::frequency::FrequencyTable;
use weatherstats::ingest::IngestionPipeline;
use weatherstats::traits::Sketch;

/// Readings on a 0.1 grid, like the sensor logs (about 600 distinct values)
fn reading(i: u64) -> f64 {
    ((i.wrapping_mul(2_654_435_761) % 600) as f64) / 10.0 - 10.0
}

fn filled_table(n: u64) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for i in 0..n {
        table.add(reading(i));
    }
    table
}

// ============================================================================
// Frequency Table Benchmarks
// ============================================================================

fn bench_frequency_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_table");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut table = FrequencyTable::new();
        let mut i = 0u64;
        b.iter(|| {
            table.add(reading(i));
            i = i.wrapping_add(1);
        });
    });

    let table = filled_table(100_000);

    group.bench_function("median", |b| {
        b.iter(|| black_box(table.median()));
    });

    group.bench_function("median_expanded", |b| {
        b.iter(|| black_box(table.median_expanded()));
    });

    group.bench_function("query_all", |b| {
        b.iter(|| {
            black_box(table.average());
            black_box(table.median());
            black_box(table.low_high());
            black_box(table.most_frequent());
        });
    });

    group.bench_function("merge", |b| {
        let other = filled_table(10_000);
        b.iter(|| {
            let mut t = table.clone();
            t.merge(black_box(&other)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let rows = 10_000u64;
    let mut log = String::from(
        "date time Air_Temp Barometric_Press Dew_Point Relative_Humidity Wind_Dir Wind_Gust Wind_Speed\n",
    );
    for i in 0..rows {
        log.push_str(&format!(
            "2015_01_01 00:{:02}:00 {:.1} {:.2} 0 0 0 0 {:.1}\n",
            i % 60,
            reading(i),
            30.0 + reading(i * 7) / 100.0,
            reading(i * 13).abs()
        ));
    }

    group.throughput(Throughput::Elements(rows));
    group.bench_function("run", |b| {
        let pipeline = IngestionPipeline::new();
        b.iter(|| black_box(pipeline.run(log.as_bytes())));
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_frequency_table, bench_pipeline);

criterion_main!(benches);
