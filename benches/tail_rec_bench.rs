//! Benchmark for `tail_rec_m` loops against their recursive `flat_map`
//! counterparts.
//!
//! Measures the per-iteration cost of the loop-based implementations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::control::Either;
use kindred::data::{State, StateK};
use kindred::instances::{OptionK, ResultK, VecK};
use kindred::typeclass::{Monad, Traverse};
use std::hint::black_box;

// =============================================================================
// Option and Result
// =============================================================================

fn benchmark_option_tail_rec_m(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("option_tail_rec_m");

    for depth in [1_000_u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let counted = OptionK::tail_rec_m(0_u64, move |n| {
                    Some(if n < depth { Either::Left(n + 1) } else { Either::Right(n) })
                });
                black_box(counted)
            });
        });
    }

    // Baseline: a plain loop
    group.bench_function("plain_loop_100000", |bencher| {
        bencher.iter(|| {
            let mut n = 0_u64;
            while n < black_box(100_000) {
                n += 1;
            }
            black_box(n)
        });
    });

    group.finish();
}

fn benchmark_result_tail_rec_m(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_tail_rec_m");

    group.bench_function("sum_to_100000", |bencher| {
        bencher.iter(|| {
            let total = ResultK::<String>::tail_rec_m((0_u64, 0_u64), |(n, sum)| {
                Ok(if n < 100_000 { Either::Left((n + 1, sum + n)) } else { Either::Right(sum) })
            });
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// State
// =============================================================================

fn benchmark_state_tail_rec_m(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_tail_rec_m");

    for depth in [1_000_u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            let program = StateK::<u64>::tail_rec_m(0_u32, move |n| {
                State::new(move |total: u64| {
                    let step = if n < depth { Either::Left(n + 1) } else { Either::Right(n) };
                    (step, total + u64::from(n))
                })
            });
            bencher.iter(|| black_box(program.run(0)));
        });
    }

    group.finish();
}

// =============================================================================
// Vec
// =============================================================================

fn benchmark_vec_tail_rec_m(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_tail_rec_m");

    // Binary branching: every level doubles the number of live branches
    for levels in [4_u32, 8, 12] {
        group.bench_with_input(BenchmarkId::new("levels", levels), &levels, |bencher, &levels| {
            bencher.iter(|| {
                let leaves = VecK::tail_rec_m(0_u32, move |depth| {
                    if depth < levels {
                        vec![Either::Left(depth + 1), Either::Left(depth + 1)]
                    } else {
                        vec![Either::Right(depth)]
                    }
                });
                black_box(leaves.len())
            });
        });
    }

    group.finish();
}

fn benchmark_vec_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_traverse_option");

    for size in [100_usize, 1_000, 10_000] {
        let input: Vec<usize> = (1..=size).collect();
        group.bench_with_input(BenchmarkId::new("size", size), &input, |bencher, input| {
            bencher.iter(|| {
                let traversed = VecK::traverse::<OptionK, usize, usize>(input.clone(), |n| n.checked_mul(2));
                black_box(traversed)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_option_tail_rec_m,
    benchmark_result_tail_rec_m,
    benchmark_state_tail_rec_m,
    benchmark_vec_tail_rec_m,
    benchmark_vec_traverse
);

criterion_main!(benches);
