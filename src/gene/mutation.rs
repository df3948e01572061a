//! Point mutation for chromosomes.
//!
//! The published model only states an "established rate of 25%"; here that
//! is read as the chance of each gene being re-drawn.

use crate::gene::chromosome::{Chromosome, random_direction, random_distance};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for mutation operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Probability of re-drawing each distance gene.
    pub distance_rate: f64,
    /// Probability of re-drawing each direction gene.
    pub direction_rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            distance_rate: 0.25,
            direction_rate: 0.25,
        }
    }
}

/// Produce a mutated copy of a chromosome.
///
/// # Panics
///
/// Panics if a rate in `config` is outside `[0, 1]`.
#[must_use]
pub fn mutate<R: Rng>(individual: &Chromosome, config: &MutationConfig, rng: &mut R) -> Chromosome {
    let mut child = *individual;
    for distance in &mut child.distances {
        if rng.gen_bool(config.distance_rate) {
            *distance = random_distance(rng);
        }
    }
    for direction in &mut child.directions {
        if rng.gen_bool(config.direction_rate) {
            *direction = random_direction(rng);
        }
    }
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::chromosome::{MAX_DISTANCE, MIN_DISTANCE};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = MutationConfig {
            distance_rate: 0.0,
            direction_rate: 0.0,
        };
        let original = Chromosome::random(&mut rng);
        assert_eq!(mutate(&original, &config, &mut rng), original);
    }

    #[test]
    fn test_full_rate_redraws_in_range() {
        let mut rng = SmallRng::seed_from_u64(2);
        let config = MutationConfig {
            distance_rate: 1.0,
            direction_rate: 1.0,
        };
        // Out-of-range genes are always replaced by in-range draws
        let original = Chromosome::new([0.0; 4], [0; 4]);
        let child = mutate(&original, &config, &mut rng);
        for distance in child.distances {
            assert!((MIN_DISTANCE..MAX_DISTANCE).contains(&distance));
        }
    }

    #[test]
    fn test_default_rate_changes_some_genes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = MutationConfig::default();
        let original = Chromosome::new([0.0; 4], [0; 4]);

        let mut changed = 0u32;
        let trials = 1000u32;
        for _ in 0..trials {
            let child = mutate(&original, &config, &mut rng);
            changed += u32::try_from(child.distances.iter().filter(|&&d| d > 0.0).count()).unwrap();
        }
        // Roughly a quarter of the 4000 distance genes are re-drawn
        let rate = f64::from(changed) / f64::from(trials * 4);
        assert!((rate - 0.25).abs() < 0.05, "observed mutation rate {rate}");
    }

    #[test]
    fn test_mutation_config_default() {
        let config = MutationConfig::default();
        assert!((config.distance_rate - 0.25).abs() < f64::EPSILON);
        assert!((config.direction_rate - 0.25).abs() < f64::EPSILON);
    }
}
