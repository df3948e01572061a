//! Find command implementation.

use super::output::{JsonSearchResult, render_grid};
use super::{BoardArgs, CliError, OutputFormat};
use ppga::{PpgaSearch, Step, manhattan};

/// Execute the find command.
///
/// # Errors
///
/// Returns an error if the board is invalid or the output cannot be encoded.
pub(crate) fn execute(
    board: &BoardArgs,
    format: OutputFormat,
    trace: bool,
) -> Result<(), CliError> {
    let scenario = board.scenario()?;
    let grid = scenario.grid();
    let mut search = PpgaSearch::new(&grid, scenario.start, scenario.goal, manhattan)?;

    let mut expansions = Vec::new();
    while let Step::Expanded(node) = search.step() {
        if trace {
            if format == OutputFormat::Text {
                println!("Expanded {node} ({} in frontier)", search.frontier_len());
            }
            expansions.push(node);
        }
    }
    let path = search.path();

    match format {
        OutputFormat::Text => {
            if trace {
                println!();
            }
            print!(
                "{}",
                render_grid(&grid, scenario.start, scenario.goal, search.connections(), &path)
            );
            println!();
            if path.is_empty() {
                println!("No path from {} to {}", scenario.start, scenario.goal);
            } else {
                println!("Path: {} moves", path.len() - 1);
            }
            println!(
                "Expanded: {}  Discovered: {}",
                search.expanded_count(),
                search.connections().len()
            );
        }
        OutputFormat::Json => {
            let result = JsonSearchResult {
                start: scenario.start,
                goal: scenario.goal,
                reached: search.reached_goal(),
                expanded: search.expanded_count(),
                discovered: search.connections().len(),
                path,
                trace: trace.then_some(expansions),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
