//! Output formatting utilities for CLI.

use ppga::{Chromosome, GeneticGraph, Grid2D, Node2D, PathEvaluation, VECTOR_COUNT, ValueMap};
use serde::Serialize;

/// JSON-serializable search result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSearchResult {
    /// Start cell.
    pub(super) start: Node2D,
    /// Goal cell.
    pub(super) goal: Node2D,
    /// Whether a path was found.
    pub(super) reached: bool,
    /// Number of expansions performed.
    pub(super) expanded: usize,
    /// Number of cells discovered.
    pub(super) discovered: usize,
    /// Cells from start to goal (empty if unreachable).
    pub(super) path: Vec<Node2D>,
    /// Expansion order, when tracing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) trace: Option<Vec<Node2D>>,
}

/// JSON-serializable chromosome evaluation.
#[derive(Debug, Serialize)]
pub(super) struct JsonEvaluation {
    /// The evaluated chromosome.
    pub(super) chromosome: Chromosome,
    /// Decoded displacement of each vector.
    pub(super) vectors: [i32; VECTOR_COUNT],
    /// The chromosome does not move.
    pub(super) restrict_null: bool,
    /// The chromosome runs into an adjacent obstacle.
    pub(super) restrict_adjacent: bool,
    /// Fitness, or null if the walk collided.
    pub(super) fitness: Option<f64>,
    /// Remaining heuristic distance, or null if the walk collided.
    pub(super) heuristic: Option<f64>,
    /// End of the walk, or null if the walk collided.
    pub(super) end: Option<Node2D>,
}

impl JsonEvaluation {
    /// Evaluate `chromosome` from `start` towards `goal`.
    pub(super) fn evaluate(
        grid: &Grid2D,
        chromosome: Chromosome,
        start: Node2D,
        goal: Node2D,
    ) -> Self {
        let evaluation = grid.evaluate_path(&chromosome, &start, &goal, ppga::manhattan);
        let valid = evaluation.is_valid();
        Self {
            chromosome,
            vectors: grid.decode(&chromosome),
            restrict_null: grid.restrict_null(&chromosome),
            restrict_adjacent: grid.restrict_adjacent(&chromosome, &start),
            fitness: valid.then_some(evaluation.fitness),
            heuristic: valid.then_some(evaluation.heuristic),
            end: valid.then_some(evaluation.end),
        }
    }
}

/// Format one evaluation as human-readable text.
pub(super) fn format_evaluation(report: &JsonEvaluation) -> String {
    let mut output = String::new();
    let chromosome = &report.chromosome;

    output.push_str(&format!(
        "Chromosome distances [{}] directions {:?}\n",
        chromosome
            .distances
            .iter()
            .map(|d| format!("{d:.2}"))
            .collect::<Vec<_>>()
            .join(", "),
        chromosome.directions
    ));
    output.push_str(&format!("  Vectors: {:?}\n", report.vectors));
    output.push_str(&format!(
        "  Restricted: null={}, adjacent={}\n",
        report.restrict_null, report.restrict_adjacent
    ));
    match (report.end, report.fitness, report.heuristic) {
        (Some(end), Some(fitness), Some(heuristic)) => {
            output.push_str(&format!(
                "  End: {end}  Heuristic: {heuristic:.2}  Fitness: {fitness:.2}\n"
            ));
        }
        _ => output.push_str("  Invalid: walk leaves the grid or hits a wall\n"),
    }
    output
}

/// Format the best of several evaluations.
pub(super) fn format_best(best: Option<&(Chromosome, PathEvaluation<Node2D>)>) -> String {
    match best {
        Some((chromosome, evaluation)) => format!(
            "Best: distances {:?} directions {:?} -> {} (fitness {:.2})\n",
            chromosome.distances, chromosome.directions, evaluation.end, evaluation.fitness
        ),
        None => "Best: no viable chromosome\n".to_string(),
    }
}

/// Render the grid with the search tree and path.
///
/// - `-` undiscovered cell
/// - `X` wall
/// - `S` start, `G` goal
/// - `@` path cell
/// - `<` `>` `^` `v` discovered cell, pointing at its predecessor
pub(super) fn render_grid(
    grid: &Grid2D,
    start: Node2D,
    goal: Node2D,
    connections: &ValueMap<Node2D, Node2D>,
    path: &[Node2D],
) -> String {
    let mut output = String::new();
    for y in 0..i32::from(grid.height()) {
        for x in 0..i32::from(grid.width()) {
            let node = Node2D::new(x, y);
            let cell = if grid.is_wall(node) {
                'X'
            } else if node == start {
                'S'
            } else if node == goal {
                'G'
            } else if path.contains(&node) {
                '@'
            } else {
                connections.get(&node).map_or('-', |&parent| arrow(node, parent))
            };
            output.push(cell);
        }
        output.push('\n');
    }
    output
}

/// Arrow from `node` towards its predecessor.
fn arrow(node: Node2D, parent: Node2D) -> char {
    match (parent.x - node.x, parent.y - node.y) {
        (1, 0) => '>',
        (-1, 0) => '<',
        (0, -1) => '^',
        (0, 1) => 'v',
        _ => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid() {
        let mut grid = Grid2D::new(3, 2);
        grid.add_wall(Node2D::new(1, 0));
        let start = Node2D::new(0, 0);
        let goal = Node2D::new(2, 0);

        let connections: ValueMap<Node2D, Node2D> = [
            (start, start),
            (Node2D::new(0, 1), start),
            (Node2D::new(1, 1), Node2D::new(0, 1)),
        ]
        .into_iter()
        .collect();
        let rendered = render_grid(&grid, start, goal, &connections, &[]);
        assert_eq!(rendered, "SXG\n^<-\n");

        let path = [start, Node2D::new(0, 1), Node2D::new(1, 1), Node2D::new(2, 1), goal];
        let rendered = render_grid(&grid, start, goal, &connections, &path);
        assert_eq!(rendered, "SXG\n@@@\n");
    }

    #[test]
    fn test_evaluation_report() {
        let mut grid = Grid2D::new(5, 5);
        for y in 1..=3 {
            grid.add_wall(Node2D::new(2, y));
        }
        let chromosome = Chromosome::new([0.4, 0.8, 0.4, 0.0], [-1, 1, 1, 0]);
        let (start, goal) = (Node2D::new(0, 2), Node2D::new(4, 2));
        let report = JsonEvaluation::evaluate(&grid, chromosome, start, goal);

        assert_eq!(report.vectors, [-2, 4, 2, 0]);
        assert_eq!(report.end, Some(Node2D::new(4, 2)));
        let text = format_evaluation(&report);
        assert!(text.starts_with(
            "Chromosome distances [0.40, 0.80, 0.40, 0.00] directions [-1, 1, 1, 0]\n  \
             Vectors: [-2, 4, 2, 0]\n"
        ));
        assert!(text.ends_with("Fitness: 29.60\n"));
    }

    #[test]
    fn test_invalid_evaluation_report() {
        let grid = Grid2D::new(5, 5);
        let chromosome = Chromosome::new([0.6, 0.0, 0.0, 0.0], [-1, 0, 0, 0]);
        let (start, goal) = (Node2D::new(0, 2), Node2D::new(4, 2));
        let report = JsonEvaluation::evaluate(&grid, chromosome, start, goal);

        assert!(report.end.is_none());
        assert!(format_evaluation(&report).contains("Invalid"));
    }
}
