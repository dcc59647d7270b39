//! Benchmarks for reference elements: shared strings under the length
//! predicate.

use criterion::{Criterion, Throughput, black_box};
use seqbench::{DataKind, Dataset, Fixed, Growable, Immutable, Repr, accept_str};

/// Run every string benchmark.
pub fn benchmark(c: &mut Criterion) {
    filter_strs(c);
    total_str_len(c);
}

/// Benchmarking the length-median filter over shared strings.
#[inline]
pub fn filter_strs(c: &mut Criterion) {
    let dataset =
        Dataset::with_selectivity(256, DataKind::Str, 0.5).expect("ratio lies within [0, 1]");
    let mut group = c.benchmark_group(format!("Filter {}", DataKind::Str.label()));
    group.throughput(Throughput::Elements(dataset.total_elements()));

    group.bench_function(Growable::LABEL, |b| {
        b.iter(|| {
            let mut kept = 0_usize;
            for subject in dataset.growable() {
                kept += subject.strs().iter().filter(|value| accept_str(value)).count();
            }
            black_box(kept)
        });
    });

    group.bench_function(Fixed::LABEL, |b| {
        b.iter(|| {
            let mut kept = 0_usize;
            for subject in dataset.fixed() {
                kept += subject.strs().iter().filter(|value| accept_str(value)).count();
            }
            black_box(kept)
        });
    });

    group.bench_function(Immutable::LABEL, |b| {
        b.iter(|| {
            let mut kept = 0_usize;
            for subject in dataset.immutable() {
                kept += subject.strs().iter().filter(|value| accept_str(value)).count();
            }
            black_box(kept)
        });
    });
}

/// Benchmarking a character-count reduction over shared strings.
#[inline]
pub fn total_str_len(c: &mut Criterion) {
    let dataset = Dataset::generate(256, DataKind::Str);
    let mut group = c.benchmark_group("Total str Length");
    group.throughput(Throughput::Elements(dataset.total_elements()));

    group.bench_function(Growable::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for subject in dataset.growable() {
                for value in subject.strs().iter() {
                    total += value.len();
                }
            }
            black_box(total)
        });
    });

    group.bench_function(Fixed::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for subject in dataset.fixed() {
                for value in subject.strs().iter() {
                    total += value.len();
                }
            }
            black_box(total)
        });
    });

    group.bench_function(Immutable::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for subject in dataset.immutable() {
                for value in subject.strs().iter() {
                    total += value.len();
                }
            }
            black_box(total)
        });
    });
}
