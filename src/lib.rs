// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! PPGA: grid pathfinding with a stepped frontier search and genetic path extension.
//!
//! This crate provides the algorithm stack behind the RTP-GA / PPGA pathfinding
//! model:
//! - Content-equality containers and an arbitrary-removal binary heap
//! - A graph capability trait and a bounded, walled 2D grid
//! - Chromosome-encoded local moves with the published fitness formula
//! - An explicitly stepped A*-style search cursor
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     PPGA Search Cursor (step)       │
//! ├──────────────────┬──────────────────┤
//! │  Graph / Grid2D  │  GeneticGraph    │
//! ├──────────────────┴──────────────────┤
//! │  ValueMap │ ValueSet │ PriorityQueue│
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ppga::{manhattan, rebuild_path, Grid2D, Node2D, PpgaSearch, Step};
//!
//! let mut grid = Grid2D::new(5, 5);
//! grid.add_wall(Node2D::new(2, 1));
//! grid.add_wall(Node2D::new(2, 2));
//! grid.add_wall(Node2D::new(2, 3));
//!
//! let start = Node2D::new(0, 2);
//! let goal = Node2D::new(4, 2);
//! let mut search = PpgaSearch::new(&grid, start, goal, manhattan)?;
//! while let Step::Expanded(_) = search.step() {}
//!
//! let path = rebuild_path(search.connections(), &start, &goal);
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! # Ok::<(), ppga::SearchError>(())
//! ```

pub mod collections;
pub mod error;
pub mod gene;
pub mod graph;
pub mod scenario;
pub mod search;

pub use error::{ParseNodeError, ScenarioError, SearchError};

// Re-export the types most callers need at crate root for convenience
pub use collections::{HeapNode, HeapOrder, PriorityQueue, ValueMap, ValueSet};
pub use gene::{Chromosome, GeneticGraph, MutationConfig, PathEvaluation, VECTOR_COUNT};
pub use graph::{Graph, Grid2D, Node2D, manhattan};
pub use scenario::Scenario;
pub use search::{PpgaSearch, SearchState, Step, find_path, rebuild_path};
