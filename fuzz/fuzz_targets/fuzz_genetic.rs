#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ppga::{Chromosome, GeneticGraph, Grid2D, Node2D, ValueMap, manhattan};

/// Structured input for chromosome walk fuzzing.
#[derive(Arbitrary, Debug)]
struct GeneticInput {
    /// Grid width.
    width: u8,
    /// Grid height.
    height: u8,
    /// Wall cells.
    walls: Vec<(u8, u8)>,
    /// Start cell.
    start: (u8, u8),
    /// Goal cell.
    goal: (u8, u8),
    /// Raw distance genes, scaled into [0, 1].
    distances: [u16; 4],
    /// Raw direction genes, folded into {-1, 0, 1}.
    directions: [u8; 4],
}

fuzz_target!(|input: GeneticInput| {
    let width = u16::from(input.width % 64).max(1);
    let height = u16::from(input.height % 64).max(1);
    let fit = |(x, y): (u8, u8)| {
        Node2D::new(i32::from(u16::from(x) % width), i32::from(u16::from(y) % height))
    };

    let start = fit(input.start);
    let goal = fit(input.goal);
    let mut grid = Grid2D::new(width, height);
    for &wall in input.walls.iter().take(256) {
        let wall = fit(wall);
        if wall != start {
            grid.add_wall(wall);
        }
    }

    let distances = input.distances.map(|d| f64::from(d) / f64::from(u16::MAX));
    let directions = input.directions.map(|d| (d % 3) as i8 - 1);
    let chromosome = Chromosome::new(distances, directions);

    let evaluation = grid.evaluate_path(&chromosome, &start, &goal, manhattan);
    if !evaluation.is_valid() {
        assert_eq!(evaluation.end, Node2D::SENTINEL);
        return;
    }
    assert!(grid.in_bounds(evaluation.end));

    let mut costs = ValueMap::new();
    let mut connections = ValueMap::new();
    costs.set(start, 0.0);
    connections.set(start, start);
    let end = grid.execute_path(&chromosome, &start, &goal, &mut costs, &mut connections);
    assert_eq!(end, evaluation.end);
    assert_eq!(costs.len(), connections.len());
});
