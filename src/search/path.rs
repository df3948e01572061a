//! Path reconstruction from a predecessor map.

use crate::collections::ValueMap;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::ppga::PpgaSearch;
use log::error;
use std::fmt::Debug;
use std::hash::Hash;

/// Walk predecessors back from `goal` and return the path `start..=goal`.
///
/// Returns an empty path if the goal was never discovered. A chain that
/// breaks before reaching `start`, or loops, is logged and also yields an
/// empty path.
#[must_use]
pub fn rebuild_path<N>(connections: &ValueMap<N, N>, start: &N, goal: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
{
    if !connections.has(goal) {
        return Vec::new();
    }

    let mut path = vec![goal.clone()];
    let mut node = goal;
    while node != start {
        let Some(previous) = connections.get(node) else {
            error!("predecessor chain from {goal:?} breaks at {node:?}");
            return Vec::new();
        };
        // Every node before the start is a distinct key, so a longer path
        // must have revisited one.
        if path.len() > connections.len() {
            error!("predecessor chain from {goal:?} loops without reaching {start:?}");
            return Vec::new();
        }
        path.push(previous.clone());
        node = previous;
    }

    path.reverse();
    path
}

/// Run a search to completion and return its path.
///
/// An unreachable goal yields an empty path.
///
/// # Errors
///
/// Returns an error if either endpoint is not part of the graph.
pub fn find_path<G, H>(
    graph: &G,
    start: G::Node,
    goal: G::Node,
    heuristic: H,
) -> Result<Vec<G::Node>, SearchError>
where
    G: Graph,
    H: Fn(&G::Node, &G::Node) -> f64,
{
    let mut search = PpgaSearch::new(graph, start, goal, heuristic)?;
    search.run();
    Ok(search.path())
}
