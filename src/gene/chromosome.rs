//! Chromosome representation.
//!
//! A chromosome holds [`VECTOR_COUNT`] movement vectors. Slots 0 and 2 move
//! along the vertical axis and slots 1 and 3 along the horizontal axis. Each
//! vector is a fractional distance (scaled by the board size when decoded)
//! and a direction in `{-1, 0, 1}`:
//!
//! - Horizontal: left is `-1`, right is `+1`
//! - Vertical: down is `-1`, up is `+1`

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of movement vectors in a chromosome.
pub const VECTOR_COUNT: usize = 4;

/// Smallest distance drawn for a random gene.
pub const MIN_DISTANCE: f64 = 0.1;

/// Upper bound (exclusive) of distances drawn for a random gene.
pub const MAX_DISTANCE: f64 = 1.0;

/// A genome of four `(distance, direction)` movement vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Fractional distance of each vector, nominally in `[0.1, 1]`.
    pub distances: [f64; VECTOR_COUNT],
    /// Direction of each vector: `-1`, `0` or `1`.
    pub directions: [i8; VECTOR_COUNT],
}

impl Chromosome {
    /// Create a chromosome from its genes.
    #[must_use]
    pub const fn new(distances: [f64; VECTOR_COUNT], directions: [i8; VECTOR_COUNT]) -> Self {
        Self {
            distances,
            directions,
        }
    }

    /// Create a random chromosome.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut distances = [0.0; VECTOR_COUNT];
        let mut directions = [0; VECTOR_COUNT];
        for (distance, direction) in distances.iter_mut().zip(&mut directions) {
            *distance = random_distance(rng);
            *direction = random_direction(rng);
        }
        Self {
            distances,
            directions,
        }
    }

    /// Check whether slot `vector` moves along the vertical axis.
    #[must_use]
    pub const fn is_vertical(vector: usize) -> bool {
        vector % 2 == 0
    }

    /// Signed, unscaled displacement of a vector: `distance × direction`.
    ///
    /// # Panics
    ///
    /// Panics if `vector >= VECTOR_COUNT`.
    #[must_use]
    pub fn signed_distance(&self, vector: usize) -> f64 {
        self.distances[vector] * f64::from(self.directions[vector])
    }
}

/// Draw a distance gene.
pub(crate) fn random_distance<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_DISTANCE..MAX_DISTANCE)
}

/// Draw a direction gene.
pub(crate) fn random_direction<R: Rng>(rng: &mut R) -> i8 {
    rng.gen_range(-1..=1)
}
