//! Criterion benchmarks for the knapsack solvers.
//!
//! Uses seeded synthetic catalogs so runs are comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reskill_knapsack::catalog::CatalogGenerator;
use reskill_knapsack::solver::{
    ExhaustiveSolver, KnapsackSolver, MemoizedSolver, SolverConfig, TabulatedSolver,
};
use reskill_knapsack::verify::Optimizer;

const SIZES: [(usize, usize); 3] = [(20, 100), (100, 500), (300, 2000)];

fn bench_memoized(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoized");
    group.sample_size(10);

    for (n, capacity) in SIZES {
        let catalog = CatalogGenerator::default().with_seed(42).generate(n).unwrap();
        let solver = MemoizedSolver::default();
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}"), capacity),
            &(catalog, capacity),
            |b, (catalog, capacity)| {
                b.iter(|| black_box(solver.solve(black_box(catalog), *capacity)))
            },
        );
    }
    group.finish();
}

fn bench_tabulated(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulated");
    group.sample_size(10);

    for parallel in [false, true] {
        for (n, capacity) in SIZES {
            let catalog = CatalogGenerator::default().with_seed(42).generate(n).unwrap();
            let solver = TabulatedSolver::new(SolverConfig::default().with_parallel(parallel));
            group.bench_with_input(
                BenchmarkId::new(format!("n{n}_par{parallel}"), capacity),
                &(catalog, capacity),
                |b, (catalog, capacity)| {
                    b.iter(|| black_box(solver.solve(black_box(catalog), *capacity)))
                },
            );
        }
    }
    group.finish();
}

fn bench_exhaustive_vs_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_vs_dp");
    group.sample_size(10);

    let catalog = CatalogGenerator::default().with_seed(7).generate(16).unwrap();
    group.bench_function("exhaustive_n16", |b| {
        b.iter(|| black_box(ExhaustiveSolver.solve(black_box(&catalog), 150)))
    });
    group.bench_function("optimizer_n16", |b| {
        let optimizer = Optimizer::default();
        b.iter(|| black_box(optimizer.run(black_box(&catalog), 150)))
    });
    group.finish();
}

criterion_group!(benches, bench_memoized, bench_tabulated, bench_exhaustive_vs_dp);
criterion_main!(benches);
