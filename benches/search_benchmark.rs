//! Benchmarks for complete searches and genetic walks.
//!
//! The frontier search and the chromosome evaluation are the hot paths.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ppga::{Chromosome, GeneticGraph, Grid2D, Node2D, find_path, manhattan};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A square board with staggered wall columns forcing a serpentine path.
fn serpentine(size: u16) -> Grid2D {
    let mut grid = Grid2D::new(size, size);
    let last = i32::from(size) - 1;
    for x in (1..last).step_by(2) {
        // Alternate the gap between the top and bottom row
        let (from, to) = if (x / 2) % 2 == 0 { (0, last - 1) } else { (1, last) };
        for y in from..=to {
            grid.add_wall(Node2D::new(x, y));
        }
    }
    grid
}

fn bench_open_grid(c: &mut Criterion) {
    let grid = Grid2D::new(64, 64);
    let start = Node2D::new(0, 0);
    let goal = Node2D::new(63, 63);

    c.bench_function("find_path_open_64", |b| {
        b.iter(|| black_box(find_path(black_box(&grid), start, goal, manhattan)));
    });
}

fn bench_serpentine(c: &mut Criterion) {
    let grid = serpentine(32);
    let start = Node2D::new(0, 0);
    let goal = Node2D::new(31, 31);

    c.bench_function("find_path_serpentine_32", |b| {
        b.iter(|| black_box(find_path(black_box(&grid), start, goal, manhattan)));
    });
}

fn bench_evaluate_path(c: &mut Criterion) {
    let grid = serpentine(32);
    let start = Node2D::new(0, 0);
    let goal = Node2D::new(31, 31);
    let mut rng = SmallRng::seed_from_u64(7);
    let chromosomes: Vec<Chromosome> = (0..256).map(|_| Chromosome::random(&mut rng)).collect();

    c.bench_function("evaluate_path_256", |b| {
        b.iter(|| {
            for chromosome in &chromosomes {
                black_box(grid.evaluate_path(chromosome, &start, &goal, manhattan));
            }
        });
    });

    c.bench_function("select_best_256", |b| {
        b.iter(|| {
            black_box(grid.select_best(chromosomes.iter().copied(), &start, &goal, manhattan))
        });
    });
}

criterion_group!(benches, bench_open_grid, bench_serpentine, bench_evaluate_path);
criterion_main!(benches);
