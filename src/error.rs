//! Error types for searches, scenarios and node parsing.

use std::fmt;
use std::io;

/// Errors reported when a search cursor is constructed.
///
/// Both variants are caller bugs: the endpoints of a search must lie inside
/// the graph. The offending node is carried in its `Debug` rendering so the
/// error stays independent of the graph's node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start node is not part of the graph.
    StartOutOfBounds(String),
    /// The goal node is not part of the graph.
    GoalOutOfBounds(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::StartOutOfBounds(node) => write!(f, "start node {node} is out of bounds"),
            SearchError::GoalOutOfBounds(node) => write!(f, "goal node {node} is out of bounds"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors raised while loading or validating a [`Scenario`](crate::Scenario).
#[derive(Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    Io(io::Error),
    /// The scenario JSON is malformed.
    Parse(serde_json::Error),
    /// A cell referenced by the scenario lies outside the grid.
    OutOfBounds {
        /// Which part of the scenario referenced the cell.
        role: &'static str,
        /// The offending cell.
        node: crate::Node2D,
    },
    /// The start or goal sits on a wall.
    Blocked {
        /// Either `"start"` or `"goal"`.
        role: &'static str,
        /// The offending cell.
        node: crate::Node2D,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read scenario: {e}"),
            Self::Parse(e) => write!(f, "invalid scenario JSON: {e}"),
            Self::OutOfBounds { role, node } => write!(f, "{role} {node} is outside the grid"),
            Self::Blocked { role, node } => write!(f, "{role} {node} is a wall"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::OutOfBounds { .. } | Self::Blocked { .. } => None,
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Error parsing a node from its `"x,y"` text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodeError {
    /// The text that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseNodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a cell as \"x,y\", got {:?}", self.input)
    }
}

impl std::error::Error for ParseNodeError {}
