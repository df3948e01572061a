//! Bounded 2D grid graph with wall obstacles.

use crate::collections::ValueSet;
use crate::error::ParseNodeError;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit moves in neighbor enumeration order: +x, -x, +y, -y.
pub(super) const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A cell of a [`Grid2D`].
///
/// Coordinates are signed so that walks may step outside the grid and be
/// rejected, and so that the `(-1, -1)` sentinel is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node2D {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Node2D {
    /// The out-of-grid node returned by invalid genetic walks.
    pub const SENTINEL: Node2D = Node2D::new(-1, -1);

    /// Create a node.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The node displaced by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check whether `other` is one orthogonal step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Node2D) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Node2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Node2D {
    type Err = ParseNodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNodeError {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self::new(x, y))
    }
}

/// Manhattan distance between two cells, the standard grid heuristic.
#[must_use]
pub fn manhattan(from: &Node2D, to: &Node2D) -> f64 {
    f64::from((from.x - to.x).abs() + (from.y - to.y).abs())
}

/// A `width` × `height` grid of 4-connected cells.
///
/// Walls are read-mostly: a search cursor borrows the grid, so walls cannot
/// change while a search is in flight.
#[derive(Debug, Clone)]
pub struct Grid2D {
    /// Width of the grid in cells.
    width: u16,
    /// Height of the grid in cells.
    height: u16,
    /// Impassable cells.
    walls: ValueSet<Node2D>,
}

impl Grid2D {
    /// Create an empty grid. A zero dimension yields a grid with no cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            walls: ValueSet::structural(),
        }
    }

    /// Width of the grid in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the grid in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a cell lies within the grid.
    #[must_use]
    pub fn in_bounds(&self, node: Node2D) -> bool {
        (0..i32::from(self.width)).contains(&node.x)
            && (0..i32::from(self.height)).contains(&node.y)
    }

    /// Check if a cell is not a wall. Bounds are not considered.
    #[must_use]
    pub fn is_passable(&self, node: Node2D) -> bool {
        !self.walls.has(&node)
    }

    /// Check if a cell is a wall.
    #[must_use]
    pub fn is_wall(&self, node: Node2D) -> bool {
        self.walls.has(&node)
    }

    /// Place a wall.
    ///
    /// Returns `false` if the cell is out of bounds or already a wall.
    pub fn add_wall(&mut self, node: Node2D) -> bool {
        self.in_bounds(node) && self.walls.add(node)
    }

    /// Remove a wall. Returns `true` if a wall was removed.
    pub fn remove_wall(&mut self, node: Node2D) -> bool {
        self.walls.delete(&node)
    }

    /// Walls in placement order.
    #[must_use]
    pub fn walls(&self) -> &[Node2D] {
        self.walls.values()
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(&self, from: Node2D, to: Node2D) -> f64 {
        manhattan(&from, &to)
    }

    /// Check if a cell can be stood on: in bounds and not a wall.
    #[must_use]
    pub(crate) fn is_open(&self, node: Node2D) -> bool {
        self.in_bounds(node) && self.is_passable(node)
    }
}

impl Graph for Grid2D {
    type Node = Node2D;

    fn neighbors(&self, node: &Node2D) -> Vec<Node2D> {
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| node.offset(dx, dy))
            .filter(|&next| self.is_open(next))
            .collect()
    }

    fn cost(&self, _from: &Node2D, _to: &Node2D) -> f64 {
        1.0
    }

    fn contains(&self, node: &Node2D) -> bool {
        self.in_bounds(*node)
    }
}
