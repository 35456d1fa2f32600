/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_symbols::{enumerate_terms, format_terms};

fn enumeration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Term Enumeration");

    group.bench_function("p3", |b| {
        b.iter(|| enumerate_terms(black_box(2), black_box(1), black_box(3)))
    });

    group.bench_function("d5", |b| {
        b.iter(|| enumerate_terms(black_box(3), black_box(2), black_box(5)))
    });

    group.bench_function("f7", |b| {
        b.iter(|| enumerate_terms(black_box(4), black_box(3), black_box(7)))
    });

    group.finish();
}

fn formatting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Term Formatting");
    let terms = enumerate_terms(4, 3, 7).unwrap_or_default();

    group.bench_function("f7_plain", |b| b.iter(|| format_terms(black_box(&terms), false)));
    group.bench_function("f7_latex", |b| b.iter(|| format_terms(black_box(&terms), true)));

    group.finish();
}

criterion_group!(benches, enumeration_benchmark, formatting_benchmark);
criterion_main!(benches);
