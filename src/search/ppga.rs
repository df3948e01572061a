//! The PPGA search cursor.

use crate::collections::{HeapNode, PriorityQueue, ValueMap};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::path::rebuild_path;
use log::{debug, trace};
use std::fmt;

/// Lifecycle of a search cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier may still hold nodes to expand.
    Running,
    /// The goal was reached or the frontier ran dry.
    Done,
}

/// Result of one [`PpgaSearch::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<N> {
    /// A node was popped and its neighbors relaxed.
    Expanded(N),
    /// The search finished; carries the goal if this step reached it.
    Done(Option<N>),
}

impl<N> Step<N> {
    /// The node expanded by this step, if any.
    #[must_use]
    pub const fn expanded(&self) -> Option<&N> {
        match self {
            Step::Expanded(node) => Some(node),
            Step::Done(_) => None,
        }
    }

    /// Check whether this step finished the search.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Cursor over an A*-style frontier search.
///
/// The frontier is a min-heap keyed by `cost + heuristic`. A node is pushed
/// again whenever a strictly cheaper route to it is found; outdated entries
/// stay in the heap and are expanded harmlessly when popped.
///
/// The cursor borrows the graph, so the graph cannot change while a search
/// is in progress.
pub struct PpgaSearch<'g, G: Graph, H> {
    graph: &'g G,
    heuristic: H,
    start: G::Node,
    goal: G::Node,
    frontier: PriorityQueue<G::Node, f64>,
    connections: ValueMap<G::Node, G::Node>,
    costs: ValueMap<G::Node, f64>,
    state: SearchState,
    expanded: usize,
}

impl<'g, G, H> PpgaSearch<'g, G, H>
where
    G: Graph,
    H: Fn(&G::Node, &G::Node) -> f64,
{
    /// Start a search from `start` towards `goal`.
    ///
    /// The start is seeded into the frontier with priority 0, maps to itself
    /// in the connection map and has cost 0.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not part of the graph.
    pub fn new(
        graph: &'g G,
        start: G::Node,
        goal: G::Node,
        heuristic: H,
    ) -> Result<Self, SearchError> {
        if !graph.contains(&start) {
            return Err(SearchError::StartOutOfBounds(format!("{start:?}")));
        }
        if !graph.contains(&goal) {
            return Err(SearchError::GoalOutOfBounds(format!("{goal:?}")));
        }

        let mut frontier = PriorityQueue::min();
        frontier.push(start.clone(), 0.0);
        let mut connections = ValueMap::new();
        connections.set(start.clone(), start.clone());
        let mut costs = ValueMap::new();
        costs.set(start.clone(), 0.0);

        debug!("search started from {start:?} towards {goal:?}");

        Ok(Self {
            graph,
            heuristic,
            start,
            goal,
            frontier,
            connections,
            costs,
            state: SearchState::Running,
            expanded: 0,
        })
    }

    /// Perform one iteration of the search.
    ///
    /// Stepping a finished cursor returns `Step::Done(None)` and changes
    /// nothing.
    pub fn step(&mut self) -> Step<G::Node> {
        if self.state == SearchState::Done {
            return Step::Done(None);
        }

        let Some(HeapNode { element: node, .. }) = self.frontier.pop() else {
            self.state = SearchState::Done;
            debug!(
                "frontier exhausted after {} expansions, {:?} unreachable",
                self.expanded, self.goal
            );
            return Step::Done(None);
        };

        if node == self.goal {
            self.state = SearchState::Done;
            debug!("reached {node:?} after {} expansions", self.expanded);
            return Step::Done(Some(node));
        }

        self.expanded += 1;
        trace!("expanding {node:?}");

        let base = self.costs.get(&node).copied().unwrap_or(0.0);
        for neighbor in self.graph.neighbors(&node) {
            let tentative = base + self.graph.cost(&node, &neighbor);
            let improved = self
                .costs
                .get(&neighbor)
                .is_none_or(|&known| tentative < known);
            if improved {
                let priority = tentative + (self.heuristic)(&neighbor, &self.goal);
                self.costs.set(neighbor.clone(), tentative);
                self.connections.set(neighbor.clone(), node.clone());
                self.frontier.push(neighbor, priority);
            }
        }

        Step::Expanded(node)
    }

    /// Step until the search finishes. Returns whether the goal was reached.
    pub fn run(&mut self) -> bool {
        while let Step::Expanded(_) = self.step() {}
        self.reached_goal()
    }
}

impl<G: Graph, H> PpgaSearch<'_, G, H> {
    /// Node → predecessor map discovered so far. The start maps to itself.
    #[must_use]
    pub const fn connections(&self) -> &ValueMap<G::Node, G::Node> {
        &self.connections
    }

    /// Best known cost from the start for every discovered node.
    #[must_use]
    pub const fn costs(&self) -> &ValueMap<G::Node, f64> {
        &self.costs
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Check whether the search has finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == SearchState::Done
    }

    /// Check whether the search finished at the goal.
    #[must_use]
    pub fn reached_goal(&self) -> bool {
        self.is_done() && self.connections.has(&self.goal)
    }

    /// Number of nodes expanded so far. The goal pop is not counted.
    #[must_use]
    pub const fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Number of entries, stale ones included, waiting in the frontier.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The start node.
    #[must_use]
    pub const fn start(&self) -> &G::Node {
        &self.start
    }

    /// The goal node.
    #[must_use]
    pub const fn goal(&self) -> &G::Node {
        &self.goal
    }

    /// Path from start to goal over the connections found so far.
    ///
    /// Empty while the goal is undiscovered.
    #[must_use]
    pub fn path(&self) -> Vec<G::Node> {
        rebuild_path(&self.connections, &self.start, &self.goal)
    }

    /// Consume the cursor, keeping its connection map.
    #[must_use]
    pub fn into_connections(self) -> ValueMap<G::Node, G::Node> {
        self.connections
    }
}

impl<G: Graph, H> fmt::Debug for PpgaSearch<'_, G, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PpgaSearch")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("state", &self.state)
            .field("expanded", &self.expanded)
            .field("frontier", &self.frontier.len())
            .field("discovered", &self.connections.len())
            .finish_non_exhaustive()
    }
}
