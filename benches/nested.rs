//! Benchmarks for one-level nested datasets.

use criterion::{Criterion, Throughput, black_box};
use seqbench::{DataKind, Fixed, Growable, Immutable, NestedDataset, Repr};

/// Run every nested benchmark.
pub fn benchmark(c: &mut Criterion) {
    flatten_sum_i32(c);
}

/// Benchmarking a flattening sum across outer slots and inner collections.
#[inline]
pub fn flatten_sum_i32(c: &mut Criterion) {
    let dataset = NestedDataset::generate(64, DataKind::I32);
    let mut group = c.benchmark_group("Flatten Sum i32");
    group.throughput(Throughput::Elements(dataset.total_elements()));

    group.bench_function(Growable::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for slot in dataset.slots() {
                for subject in slot.growable() {
                    for &value in subject.i32s().iter() {
                        total += i64::from(value);
                    }
                }
            }
            black_box(total)
        });
    });

    group.bench_function(Fixed::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for slot in dataset.slots() {
                for subject in slot.fixed() {
                    for &value in subject.i32s().iter() {
                        total += i64::from(value);
                    }
                }
            }
            black_box(total)
        });
    });

    group.bench_function(Immutable::LABEL, |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for slot in dataset.slots() {
                for subject in slot.immutable() {
                    for &value in subject.i32s().iter() {
                        total += i64::from(value);
                    }
                }
            }
            black_box(total)
        });
    });
}
