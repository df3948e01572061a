//! CLI command implementations for PPGA.

pub(crate) mod evaluate;
pub(crate) mod find;

mod output;

use clap::ValueEnum;
use ppga::{Node2D, Scenario, ScenarioError, SearchError};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text with a rendered grid.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Board description shared by all commands.
#[derive(clap::Args, Debug)]
pub(crate) struct BoardArgs {
    /// Scenario JSON file; overrides the other board options
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Grid width (default: 10)
    #[arg(long, default_value = "10")]
    width: u16,

    /// Grid height (default: 10)
    #[arg(long, default_value = "10")]
    height: u16,

    /// Start cell as x,y (default: top-left corner)
    #[arg(long, allow_hyphen_values = true)]
    start: Option<Node2D>,

    /// Goal cell as x,y (default: bottom-right corner)
    #[arg(long, allow_hyphen_values = true)]
    goal: Option<Node2D>,

    /// Wall cell as x,y; repeat for more walls
    #[arg(long = "wall", allow_hyphen_values = true)]
    walls: Vec<Node2D>,
}

impl BoardArgs {
    /// Build and validate the scenario these options describe.
    pub(crate) fn scenario(&self) -> Result<Scenario, CliError> {
        if let Some(path) = &self.scenario {
            return Scenario::load(path)
                .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())));
        }

        let far_corner = Node2D::new(
            i32::from(self.width) - 1,
            i32::from(self.height) - 1,
        );
        let scenario = Scenario {
            width: self.width,
            height: self.height,
            walls: self.walls.clone(),
            start: self.start.unwrap_or(Node2D::new(0, 0)),
            goal: self.goal.unwrap_or(far_corner),
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<ScenarioError> for CliError {
    fn from(e: ScenarioError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
