//! Chromosome-encoded local moves for genetic path extension.
//!
//! This module implements the movement encoding of the RTP-GA / PPGA
//! pathfinding papers. A chromosome packs a multi-step local move into four
//! `(distance, direction)` vectors that alternate between the vertical and
//! horizontal axes. Graphs that can decode and walk such moves implement
//! [`GeneticGraph`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   GeneticGraph (restrict / walk)    │
//! ├─────────────────────────────────────┤
//! │  Random │ Crossover │ Mutation      │
//! ├─────────────────────────────────────┤
//! │   Chromosome │ Fitness              │
//! └─────────────────────────────────────┘
//! ```
//!
//! Only the primitives live here; there is no generational population loop.

mod chromosome;
mod crossover;
mod fitness;
mod genetic_graph;
mod mutation;

pub use chromosome::{Chromosome, MAX_DISTANCE, MIN_DISTANCE, VECTOR_COUNT};
pub use crossover::crossover;
pub use fitness::{calculate_fitness, roof, MOVEMENT_WEIGHT};
pub use genetic_graph::{GeneticGraph, PathEvaluation};
pub use mutation::{mutate, MutationConfig};
