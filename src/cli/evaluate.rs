//! Evaluate command implementation.

use super::output::{JsonEvaluation, format_best, format_evaluation, render_grid};
use super::{BoardArgs, CliError, OutputFormat};
use ppga::{Chromosome, GeneticGraph, Grid2D, Node2D, VECTOR_COUNT, ValueMap, manhattan};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Execute the evaluate command.
///
/// Evaluates either the chromosome given by `genes` or `random` sampled
/// chromosomes.
///
/// # Errors
///
/// Returns an error if the board or the genes are invalid.
pub(crate) fn execute(
    board: &BoardArgs,
    genes: Option<(Vec<f64>, Vec<i8>)>,
    random: Option<usize>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let scenario = board.scenario()?;
    let grid = scenario.grid();

    let chromosomes = match (genes, random) {
        (Some((distances, directions)), _) => vec![parse_chromosome(&distances, &directions)?],
        (None, Some(count)) => {
            // Generate seed if not provided
            let seed = seed.unwrap_or_else(rand::random);
            if format == OutputFormat::Text {
                println!("Sampling {count} chromosomes with seed {seed}");
                println!();
            }
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..count).map(|_| Chromosome::random(&mut rng)).collect()
        }
        (None, None) => {
            return Err(CliError::new(
                "Give a chromosome with --distances and --directions, or --random N",
            ));
        }
    };

    let reports: Vec<JsonEvaluation> = chromosomes
        .iter()
        .map(|&chromosome| {
            JsonEvaluation::evaluate(&grid, chromosome, scenario.start, scenario.goal)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", format_evaluation(report));
            }
            if let [chromosome] = chromosomes.as_slice() {
                println!();
                print!("{}", render_walk(&grid, chromosome, scenario.start, scenario.goal));
            } else {
                let best = grid.select_best(
                    chromosomes.iter().copied(),
                    &scenario.start,
                    &scenario.goal,
                    manhattan,
                );
                println!();
                print!("{}", format_best(best.as_ref()));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

/// Build a chromosome from command-line genes.
fn parse_chromosome(distances: &[f64], directions: &[i8]) -> Result<Chromosome, CliError> {
    let wrong_count = |genes: &str, count: usize| {
        CliError::new(format!("Expected {VECTOR_COUNT} {genes}, got {count}"))
    };
    let distances: [f64; VECTOR_COUNT] = distances
        .try_into()
        .map_err(|_| wrong_count("distances", distances.len()))?;
    let directions: [i8; VECTOR_COUNT] = directions
        .try_into()
        .map_err(|_| wrong_count("directions", directions.len()))?;

    if let Some(bad) = directions.iter().find(|d| !(-1..=1).contains(*d)) {
        return Err(CliError::new(format!("Direction {bad} is not -1, 0 or 1")));
    }
    if let Some(bad) = distances.iter().find(|d| !(0.0..=1.0).contains(*d)) {
        return Err(CliError::new(format!("Distance {bad} is outside [0, 1]")));
    }
    Ok(Chromosome::new(distances, directions))
}

/// Render the cells a chromosome walks through from `start`.
///
/// Cells are taken from the walk itself rather than from executed
/// connections, which a backtracking walk overwrites.
fn render_walk(grid: &Grid2D, chromosome: &Chromosome, start: Node2D, goal: Node2D) -> String {
    let connections = ValueMap::new();
    if !grid.evaluate_path(chromosome, &start, &goal, manhattan).is_valid() {
        return render_grid(grid, start, goal, &connections, &[]);
    }

    let mut cells = vec![start];
    for next in grid.walk(chromosome, start) {
        cells.push(next);
        if next == goal {
            break;
        }
    }
    render_grid(grid, start, goal, &connections, &cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chromosome() {
        let chromosome = parse_chromosome(&[0.4, 0.8, 0.4, 0.0], &[-1, 1, 1, 0]).unwrap();
        assert_eq!(chromosome.directions, [-1, 1, 1, 0]);

        assert!(parse_chromosome(&[0.4, 0.8], &[-1, 1, 1, 0]).is_err());
        assert!(parse_chromosome(&[0.4, 0.8, 0.4, 0.0], &[-1, 2, 1, 0]).is_err());
        assert!(parse_chromosome(&[0.4, 1.8, 0.4, 0.0], &[-1, 1, 1, 0]).is_err());
    }

    #[test]
    fn test_render_walk() {
        let grid = Grid2D::new(3, 3);
        let chromosome = Chromosome::new([0.0, 0.7, 0.7, 0.0], [0, 1, -1, 0]);
        let rendered = render_walk(&grid, &chromosome, Node2D::new(0, 0), Node2D::new(2, 2));
        assert_eq!(rendered, "S@@\n--@\n--G\n");
    }

    #[test]
    fn test_render_backtracking_walk() {
        // Down two cells, then back up one
        let grid = Grid2D::new(5, 5);
        let chromosome = Chromosome::new([0.4, 0.0, 0.2, 0.0], [-1, 0, 1, 0]);
        let start = Node2D::new(2, 2);
        let goal = Node2D::new(0, 0);
        assert!(grid.evaluate_path(&chromosome, &start, &goal, manhattan).is_valid());

        let rendered = render_walk(&grid, &chromosome, start, goal);
        assert_eq!(rendered, "G----\n-----\n--S--\n--@--\n--@--\n");
    }

    #[test]
    fn test_render_invalid_walk() {
        let grid = Grid2D::new(3, 3);
        let chromosome = Chromosome::new([0.0, 1.0, 0.0, 0.0], [0, 1, 0, 0]);
        let rendered = render_walk(&grid, &chromosome, Node2D::new(0, 0), Node2D::new(2, 2));
        assert_eq!(rendered, "S--\n---\n--G\n");
    }
}
