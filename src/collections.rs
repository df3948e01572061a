//! Containers keyed by value rather than by identity.
//!
//! Search state is indexed by composite nodes (e.g. `(x, y)` pairs), so every
//! container here compares elements structurally:
//! - [`ValueMap`]: insertion-ordered hash map
//! - [`ValueSet`]: small set with a caller-supplied equality predicate
//! - [`PriorityQueue`]: binary heap with arbitrary-element removal

mod priority_queue;
mod value_map;
mod value_set;

pub use priority_queue::{HeapNode, HeapOrder, PriorityQueue};
pub use value_map::ValueMap;
pub use value_set::ValueSet;
