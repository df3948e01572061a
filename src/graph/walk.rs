//! Genetic path walking on [`Grid2D`].
//!
//! A chromosome is decoded into four signed whole-cell displacements and
//! walked one unit step at a time, in slot order. Vertical slots use the
//! "up is positive" convention of the genome, so a positive vertical
//! displacement decreases `y`.

#![allow(clippy::cast_possible_truncation)]

use crate::collections::ValueMap;
use crate::gene::{Chromosome, GeneticGraph, PathEvaluation, VECTOR_COUNT, calculate_fitness, roof};
use crate::graph::Graph;
use crate::graph::grid::{DIRECTIONS, Grid2D, Node2D};
use log::error;
use std::iter;

impl Grid2D {
    /// Decoded displacements of all four vectors, in whole cells.
    #[must_use]
    pub fn decode(&self, chromosome: &Chromosome) -> [i32; VECTOR_COUNT] {
        let mut vectors = [0; VECTOR_COUNT];
        for (slot, vector) in vectors.iter_mut().enumerate() {
            *vector = self.vector_distance(chromosome, slot);
        }
        vectors
    }

    /// Every cell visited by the chromosome's walk from `start`, in order.
    ///
    /// Cells are yielded without bounds or wall checks, and a backtracking
    /// walk yields the same cell more than once. `start` itself is not
    /// yielded.
    pub fn walk(&self, chromosome: &Chromosome, start: Node2D) -> impl Iterator<Item = Node2D> {
        self.decode(chromosome)
            .into_iter()
            .enumerate()
            .flat_map(|(slot, vector)| {
                let unit = vector.signum();
                let step = if Chromosome::is_vertical(slot) {
                    (0, -unit)
                } else {
                    (unit, 0)
                };
                iter::repeat_n(step, vector.unsigned_abs() as usize)
            })
            .scan(start, |position, (dx, dy)| {
                *position = position.offset(dx, dy);
                Some(*position)
            })
    }
}

impl GeneticGraph for Grid2D {
    const SENTINEL: Node2D = Node2D::SENTINEL;

    fn vector_distance(&self, chromosome: &Chromosome, vector: usize) -> i32 {
        let scale = if Chromosome::is_vertical(vector) {
            self.height()
        } else {
            self.width()
        };
        (chromosome.signed_distance(vector) * f64::from(scale)).trunc() as i32
    }

    fn restrict_null(&self, chromosome: &Chromosome) -> bool {
        let [v1, v2, v3, v4] = self.decode(chromosome);
        v1 + v3 == 0 && v2 + v4 == 0
    }

    fn restrict_adjacent(&self, chromosome: &Chromosome, node: &Node2D) -> bool {
        let [v1, v2, v3, v4] = self.decode(chromosome);

        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| node.offset(dx, dy))
            .filter(|&neighbor| !self.is_open(neighbor))
            .any(|blocked| {
                let up = blocked.y < node.y && (v1 > 0 || (v2 == 0 && v1 + v3 > 0));
                let right = blocked.x > node.x
                    && ((v1 == 0 && v2 > 0) || (v1 + v3 == 0 && v2 + v4 > 0));
                let down = blocked.y > node.y && (v1 < 0 || (v2 == 0 && v1 + v3 < 0));
                let left = blocked.x < node.x
                    && ((v1 == 0 && v2 < 0) || (v1 + v3 == 0 && v2 + v4 < 0));
                up || right || down || left
            })
    }

    fn evaluate_path<H>(
        &self,
        chromosome: &Chromosome,
        node: &Node2D,
        goal: &Node2D,
        heuristic: H,
    ) -> PathEvaluation<Node2D>
    where
        H: Fn(&Node2D, &Node2D) -> f64,
    {
        let mut end = *node;
        let mut steps = 0u32;
        for next in self.walk(chromosome, *node) {
            steps += 1;
            if !self.is_open(next) {
                return PathEvaluation::invalid(Self::SENTINEL);
            }
            end = next;
            if end == *goal {
                break;
            }
        }

        let distance = heuristic(&end, goal);
        PathEvaluation {
            fitness: calculate_fitness(
                distance,
                f64::from(steps) / 2.0,
                roof(self.width(), self.height()),
            ),
            heuristic: distance,
            end,
        }
    }

    fn execute_path(
        &self,
        chromosome: &Chromosome,
        node: &Node2D,
        goal: &Node2D,
        costs: &mut ValueMap<Node2D, f64>,
        connections: &mut ValueMap<Node2D, Node2D>,
    ) -> Node2D {
        let mut current = *node;
        for next in self.walk(chromosome, *node) {
            if !self.is_open(next) {
                error!("walk from {node} reached blocked cell {next} after validation");
                return Self::SENTINEL;
            }
            let cost = costs.get(&current).copied().unwrap_or(0.0) + self.cost(&current, &next);
            connections.set(next, current);
            costs.set(next, cost);
            current = next;
            if current == *goal {
                break;
            }
        }
        current
    }
}
