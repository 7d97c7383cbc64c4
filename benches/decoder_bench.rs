//! Decoder and catalog throughput benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vincheck::catalog::build_catalog;
use vincheck::data::{ReferenceData, WmiEntry};
use vincheck::vin::{decode_vin, validate_vin};

fn fixture_entries() -> Vec<WmiEntry> {
    let rows = [
        ("WBA", "BMW AG", "Germany"),
        ("WBS", "BMW AG", "Germany"),
        ("JTD", "TOYOTA MOTOR CORPORATION", "Japan"),
        ("JHM", "HONDA MOTOR CO., LTD.", "Japan"),
        ("1HG", "HONDA MOTOR CO., LTD.", "United States"),
        ("JN1", "NISSAN MOTOR CO., LTD.", "Japan"),
        ("WDB", "MERCEDES-BENZ AG", "Germany"),
        ("WAU", "AUDI AG", "Germany"),
        ("WVW", "VOLKSWAGEN AG", "Germany"),
        ("ZFF", "FERRARI", "Italy"),
    ];
    rows.iter()
        .map(|&(wmi, manufacturer, country)| WmiEntry {
            wmi: wmi.to_string(),
            manufacturer: manufacturer.to_string(),
            country: country.to_string(),
        })
        .collect()
}

fn bench_decoder(c: &mut Criterion) {
    let data = ReferenceData::from_entries(fixture_entries());

    let mut group = c.benchmark_group("decoder");
    group.throughput(Throughput::Elements(1));

    group.bench_function("decode_known_wmi", |b| {
        b.iter(|| decode_vin(black_box("WBA3B5C56DF123456"), &data));
    });

    group.bench_function("decode_with_prefix_fallback", |b| {
        // "JNX" misses, falls back through "JN" to nothing, then fails;
        // exercises the full prefix walk.
        b.iter(|| decode_vin(black_box("JNX3B5C56DF123456"), &data));
    });

    group.bench_function("validate_vin", |b| {
        b.iter(|| validate_vin(black_box("WBA3B5C56DF123456")));
    });

    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let entries = fixture_entries();

    let mut group = c.benchmark_group("catalog");
    group.throughput(Throughput::Elements(entries.len() as u64));

    group.bench_function("build_catalog", |b| {
        b.iter(|| build_catalog(black_box(&entries)));
    });

    group.finish();
}

criterion_group!(benches, bench_decoder, bench_catalog);
criterion_main!(benches);
