//! Genetic path capability of a graph.

use crate::collections::ValueMap;
use crate::gene::chromosome::Chromosome;
use crate::graph::Graph;

/// Outcome of walking a chromosome without side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEvaluation<N> {
    /// Fitness of the move, or `-1` if the walk collided.
    pub fitness: f64,
    /// Heuristic distance from the end of the walk to the goal, or `-1`.
    pub heuristic: f64,
    /// Where the walk stopped, or the graph's sentinel node.
    pub end: N,
}

impl<N> PathEvaluation<N> {
    /// Score reported by an invalid walk.
    pub const INVALID_SCORE: f64 = -1.0;

    /// The evaluation of a walk that left the graph or hit a wall.
    pub const fn invalid(sentinel: N) -> Self {
        Self {
            fitness: Self::INVALID_SCORE,
            heuristic: Self::INVALID_SCORE,
            end: sentinel,
        }
    }

    /// Check whether the walk completed.
    ///
    /// Heuristics are non-negative, so only the sentinel reports a negative
    /// distance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.heuristic >= 0.0
    }
}

/// A graph that can decode and walk [`Chromosome`] moves.
pub trait GeneticGraph: Graph {
    /// Node returned by walks that leave the graph or hit an obstacle.
    const SENTINEL: Self::Node;

    /// Decoded signed length of vector `vector`, in whole moves.
    fn vector_distance(&self, chromosome: &Chromosome, vector: usize) -> i32;

    /// True if the chromosome has no net displacement and must be discarded.
    fn restrict_null(&self, chromosome: &Chromosome) -> bool;

    /// True if the chromosome's first movement from `node` runs straight into
    /// an adjacent obstacle.
    fn restrict_adjacent(&self, chromosome: &Chromosome, node: &Self::Node) -> bool;

    /// Walk the chromosome from `node` and score where it ends.
    ///
    /// The walk stops early on reaching `goal`. A walk that leaves the graph
    /// or enters an obstacle yields [`PathEvaluation::invalid`].
    fn evaluate_path<H>(
        &self,
        chromosome: &Chromosome,
        node: &Self::Node,
        goal: &Self::Node,
        heuristic: H,
    ) -> PathEvaluation<Self::Node>
    where
        H: Fn(&Self::Node, &Self::Node) -> f64;

    /// Walk the chromosome from `node`, recording every step in the search
    /// maps, and return the node where the walk stopped.
    ///
    /// Callers validate the chromosome first; a collision here is an internal
    /// error and returns [`SENTINEL`](Self::SENTINEL).
    ///
    /// Each step overwrites any existing entry for its cell, including
    /// `node` itself. After a walk that revisits a cell the maps are no
    /// longer a tree rooted at `node`: predecessors may form a cycle and a
    /// cell may keep a higher cost than an earlier visit gave it. Use
    /// [`rebuild_path`](crate::search::rebuild_path) on them only for walks
    /// that never backtrack.
    fn execute_path(
        &self,
        chromosome: &Chromosome,
        node: &Self::Node,
        goal: &Self::Node,
        costs: &mut ValueMap<Self::Node, f64>,
        connections: &mut ValueMap<Self::Node, Self::Node>,
    ) -> Self::Node;

    /// True if the chromosome passes both restrictions at `node`.
    fn is_viable(&self, chromosome: &Chromosome, node: &Self::Node) -> bool {
        !self.restrict_null(chromosome) && !self.restrict_adjacent(chromosome, node)
    }

    /// Pick the fittest viable candidate whose walk from `node` is valid.
    ///
    /// Ties keep the earliest candidate.
    fn select_best<I, H>(
        &self,
        candidates: I,
        node: &Self::Node,
        goal: &Self::Node,
        heuristic: H,
    ) -> Option<(Chromosome, PathEvaluation<Self::Node>)>
    where
        I: IntoIterator<Item = Chromosome>,
        H: Fn(&Self::Node, &Self::Node) -> f64,
    {
        let mut best: Option<(Chromosome, PathEvaluation<Self::Node>)> = None;
        for candidate in candidates {
            if !self.is_viable(&candidate, node) {
                continue;
            }
            let evaluation = self.evaluate_path(&candidate, node, goal, &heuristic);
            if !evaluation.is_valid() {
                continue;
            }
            let better = best
                .as_ref()
                .is_none_or(|(_, current)| evaluation.fitness > current.fitness);
            if better {
                best = Some((candidate, evaluation));
            }
        }
        best
    }
}
