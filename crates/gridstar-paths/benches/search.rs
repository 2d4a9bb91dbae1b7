//! Benchmark A* over open and randomly obstructed grids.
//!
//! Run with: cargo bench -p gridstar-paths --bench search

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gridstar_core::{BLOCKED, Grid, OPEN, Point};
use gridstar_paths::Pathfinder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn open_grid(n: i32) -> Grid {
    Grid::from_fn(Point::ZERO, Point::new(n, n), |_| OPEN).unwrap()
}

fn obstructed_grid(n: i32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(Point::ZERO, Point::new(n, n), |p| {
        let corner = p == Point::ZERO || p == Point::new(n - 1, n - 1);
        if !corner && rng.random_bool(0.25) { BLOCKED } else { OPEN }
    })
    .unwrap()
}

fn benchmark_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_open");
    let pf = Pathfinder::new();
    for n in [16, 64, 128] {
        let grid = open_grid(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| pf.find_path(black_box(grid), Point::ZERO, Point::new(n - 1, n - 1)))
        });
    }
    group.finish();
}

fn benchmark_obstructed(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_obstructed");
    let pf = Pathfinder::new();
    for n in [16, 64, 128] {
        let grid = obstructed_grid(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| pf.find_path(black_box(grid), Point::ZERO, Point::new(n - 1, n - 1)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_open, benchmark_obstructed);
criterion_main!(benches);
