//! Fitness of a candidate local move.
//!
//! Implements the fitness function of the PPGA paper:
//!
//! ```text
//! fitness = roof - heuristic - total_movement * 0.1
//! ```
//!
//! where `total_movement` is half the number of unit steps walked and `roof`
//! bounds the distance any move on the board can cover.

/// Weight of the movement penalty.
pub const MOVEMENT_WEIGHT: f64 = 0.1;

/// Fitness of a move ending `heuristic` away from the goal after
/// `total_movement` (half-steps) of travel.
#[must_use]
pub fn calculate_fitness(heuristic: f64, total_movement: f64, roof: f64) -> f64 {
    roof - heuristic - total_movement * MOVEMENT_WEIGHT
}

/// Fitness roof for a `width` × `height` board: `3 × (width + height)`.
#[must_use]
pub fn roof(width: u16, height: u16) -> f64 {
    3.0 * (f64::from(width) + f64::from(height))
}
