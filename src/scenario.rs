//! JSON-described search scenarios.
//!
//! A scenario fixes everything a search needs apart from the heuristic:
//!
//! ```json
//! {
//!   "width": 5,
//!   "height": 5,
//!   "walls": [{ "x": 2, "y": 1 }, { "x": 2, "y": 2 }, { "x": 2, "y": 3 }],
//!   "start": { "x": 0, "y": 2 },
//!   "goal": { "x": 4, "y": 2 }
//! }
//! ```

use crate::error::ScenarioError;
use crate::graph::{Grid2D, Node2D};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A grid, its walls and the endpoints of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Wall cells. Duplicates are ignored.
    #[serde(default)]
    pub walls: Vec<Node2D>,
    /// Where the search starts.
    pub start: Node2D,
    /// Where the search should end.
    pub goal: Node2D,
}

impl Scenario {
    /// Parse and validate a scenario from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the scenario is invalid.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or describes
    /// an invalid scenario.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Render the scenario as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scenario to a file as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file I/O fails.
    pub fn save(&self, path: &Path) -> Result<(), ScenarioError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check that every cell lies on the grid and that neither endpoint is a
    /// wall.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: endpoints are checked before walls.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let grid = Grid2D::new(self.width, self.height);
        let cells = [("start", self.start), ("goal", self.goal)]
            .into_iter()
            .chain(self.walls.iter().map(|&wall| ("wall", wall)));
        for (role, node) in cells {
            if !grid.in_bounds(node) {
                return Err(ScenarioError::OutOfBounds { role, node });
            }
        }

        for (role, node) in [("start", self.start), ("goal", self.goal)] {
            if self.walls.contains(&node) {
                return Err(ScenarioError::Blocked { role, node });
            }
        }
        Ok(())
    }

    /// Build the grid described by the scenario.
    ///
    /// Out-of-bounds walls are dropped.
    #[must_use]
    pub fn grid(&self) -> Grid2D {
        let mut grid = Grid2D::new(self.width, self.height);
        for &wall in &self.walls {
            grid.add_wall(wall);
        }
        grid
    }
}
