//! Benchmarks for the N-Queens solvers.
//!
//! - **`backtrack`**: full enumeration for n = 6, 8 and 10.
//! - **`min_conflicts`**: one seeded local search for n = 8, 32 and 128.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use nqueens_solver::{BacktrackSolver, BoardSize, MinConflictsConfig, MinConflictsSolver};
use rand::SeedableRng;
use rand_pcg::Pcg64;

const SEED: u64 = 0x5eed;

fn bench_backtrack(c: &mut Criterion) {
    for n in [6, 8, 10] {
        let solver = BacktrackSolver::new(BoardSize::new(n).unwrap());
        c.bench_with_input(BenchmarkId::new("backtrack", n), &solver, |b, solver| {
            b.iter(|| {
                let (solutions, _) = hint::black_box(solver).solve();
                hint::black_box(solutions.len())
            });
        });
    }
}

fn bench_min_conflicts(c: &mut Criterion) {
    for n in [8, 32, 128] {
        let size = BoardSize::new(n).unwrap();
        let solver = MinConflictsSolver::new(size, MinConflictsConfig::default());
        c.bench_with_input(BenchmarkId::new("min_conflicts", n), &solver, |b, solver| {
            b.iter_batched_ref(
                || Pcg64::seed_from_u64(SEED),
                |rng| hint::black_box(solver.solve(rng)),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_backtrack, bench_min_conflicts);
criterion_main!(benches);
