//! Uniform crossover for chromosomes.
//!
//! The child takes exactly half of its distance genes and half of its
//! direction genes from each parent. Which slots come from which parent is
//! decided by shuffling a balanced inheritance mask, independently for the
//! two gene arrays.

use crate::gene::chromosome::{Chromosome, VECTOR_COUNT};
use rand::Rng;
use rand::seq::SliceRandom;

/// Combine two parents into a child chromosome.
#[must_use]
pub fn crossover<R: Rng>(parent1: &Chromosome, parent2: &Chromosome, rng: &mut R) -> Chromosome {
    let distance_mask = inheritance_mask(rng);
    let direction_mask = inheritance_mask(rng);

    let mut child = *parent1;
    for slot in 0..VECTOR_COUNT {
        if distance_mask[slot] {
            child.distances[slot] = parent2.distances[slot];
        }
        if direction_mask[slot] {
            child.directions[slot] = parent2.directions[slot];
        }
    }
    child
}

/// A shuffled mask with `true` (inherit from the second parent) in exactly
/// half of the slots.
fn inheritance_mask<R: Rng>(rng: &mut R) -> [bool; VECTOR_COUNT] {
    let mut mask = [false; VECTOR_COUNT];
    for flag in mask.iter_mut().skip(VECTOR_COUNT / 2) {
        *flag = true;
    }
    mask.shuffle(rng);
    mask
}
