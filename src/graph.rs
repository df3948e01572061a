//! Graph capability traits and the 2D grid graph.
//!
//! A search only needs two capabilities from a graph: the neighbors of a node
//! and the cost of an edge. Everything else (bounds, walls, genetic path
//! walking) is provided by concrete graphs such as [`Grid2D`].

mod grid;
mod walk;

use std::fmt::Debug;
use std::hash::Hash;

pub use grid::{manhattan, Grid2D, Node2D};

/// A finite, undirected graph with non-negative edge costs.
pub trait Graph {
    /// Vertex type. Compared and hashed by value.
    type Node: Clone + Eq + Hash + Debug;

    /// Nodes reachable from `node` in one move, in a deterministic order.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Cost of moving from `from` to `to`. Never negative.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> f64;

    /// Check whether `node` belongs to the graph.
    ///
    /// Used to reject search endpoints; unbounded graphs keep the default.
    fn contains(&self, node: &Self::Node) -> bool {
        let _ = node;
        true
    }
}
