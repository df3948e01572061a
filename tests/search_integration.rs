//! End-to-end tests for scenario-driven searches.
//!
//! Run with: cargo test --release search_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use ppga::{
    Chromosome, GeneticGraph, Node2D, PpgaSearch, Scenario, ScenarioError, SearchState, Step,
    ValueMap, find_path, manhattan, rebuild_path,
};

const WALLED: &str = r#"{
    "width": 5,
    "height": 5,
    "walls": [{ "x": 2, "y": 1 }, { "x": 2, "y": 2 }, { "x": 2, "y": 3 }],
    "start": { "x": 0, "y": 2 },
    "goal": { "x": 4, "y": 2 }
}"#;

#[test]
fn test_repeated_runs_are_identical() {
    let scenario = Scenario::from_json(WALLED).unwrap();
    let grid = scenario.grid();

    let first = find_path(&grid, scenario.start, scenario.goal, manhattan).unwrap();
    assert_eq!(first.len(), 9);
    for _ in 0..20 {
        let again = find_path(&grid, scenario.start, scenario.goal, manhattan).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_cursors_share_a_grid() {
    let scenario = Scenario::from_json(WALLED).unwrap();
    let grid = scenario.grid();

    let mut forward = PpgaSearch::new(&grid, scenario.start, scenario.goal, manhattan).unwrap();
    let mut backward = PpgaSearch::new(&grid, scenario.goal, scenario.start, manhattan).unwrap();

    // Interleave the two searches step by step
    while !(forward.is_done() && backward.is_done()) {
        forward.step();
        backward.step();
    }

    let there = forward.path();
    let mut back = backward.path();
    back.reverse();
    assert_eq!(there.len(), back.len());
    assert_eq!(there.first(), back.first());
    assert_eq!(there.last(), back.last());
}

#[test]
fn test_step_snapshots_grow() {
    let scenario = Scenario::from_json(WALLED).unwrap();
    let grid = scenario.grid();
    let mut search = PpgaSearch::new(&grid, scenario.start, scenario.goal, manhattan).unwrap();

    let mut discovered = search.connections().len();
    let mut expanded = Vec::new();
    loop {
        match search.step() {
            Step::Expanded(node) => {
                assert!(search.connections().len() >= discovered);
                discovered = search.connections().len();
                expanded.push(node);
            }
            Step::Done(goal) => {
                assert_eq!(goal, Some(scenario.goal));
                break;
            }
        }
    }
    assert_eq!(search.state(), SearchState::Done);
    assert_eq!(expanded.first(), Some(&scenario.start));
    assert!(!expanded.contains(&scenario.goal));
    assert_eq!(expanded.len(), search.expanded_count());
}

#[test]
fn test_walled_off_goal() {
    let json = r#"{
        "width": 5,
        "height": 5,
        "walls": [{ "x": 3, "y": 2 }, { "x": 4, "y": 1 }, { "x": 4, "y": 3 }],
        "start": { "x": 0, "y": 2 },
        "goal": { "x": 4, "y": 2 }
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    let grid = scenario.grid();
    let mut search = PpgaSearch::new(&grid, scenario.start, scenario.goal, manhattan).unwrap();

    let last = loop {
        let step = search.step();
        if step.is_done() {
            break step;
        }
    };
    assert_eq!(last, Step::Done(None));
    assert!(!search.connections().has(&scenario.goal));
    assert!(rebuild_path(search.connections(), &scenario.start, &scenario.goal).is_empty());
}

#[test]
fn test_scenario_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walled.json");

    let scenario = Scenario::from_json(WALLED).unwrap();
    scenario.save(&path).unwrap();
    let loaded = Scenario::load(&path).unwrap();
    assert_eq!(loaded, scenario);

    let path_cells = find_path(&loaded.grid(), loaded.start, loaded.goal, manhattan).unwrap();
    assert_eq!(path_cells.len(), 9);
}

#[test]
fn test_invalid_scenario_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"width": 3, "height": 3, "walls": [{"x": 0, "y": 0}], "start": {"x": 0, "y": 0}, "goal": {"x": 2, "y": 2}}"#,
    )
    .unwrap();

    let err = Scenario::load(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::Blocked { role: "start", .. }));
}

#[test]
fn test_genetic_move_then_search() {
    // A validated chromosome jump is recorded in the maps, and the frontier
    // search finishes from where the jump landed.
    let scenario = Scenario::from_json(WALLED).unwrap();
    let grid = scenario.grid();
    let (start, goal) = (scenario.start, scenario.goal);
    let chromosome = Chromosome::new([0.4, 0.6, 0.0, 0.0], [-1, 1, 0, 0]);

    assert!(grid.is_viable(&chromosome, &start));
    let evaluation = grid.evaluate_path(&chromosome, &start, &goal, manhattan);
    assert!(evaluation.is_valid());
    assert_eq!(evaluation.end, Node2D::new(3, 4));

    let mut costs = ValueMap::new();
    let mut connections = ValueMap::new();
    costs.set(start, 0.0);
    connections.set(start, start);
    let end = grid.execute_path(&chromosome, &start, &goal, &mut costs, &mut connections);
    assert_eq!(end, evaluation.end);
    assert!((costs.get(&end).copied().unwrap() - 5.0).abs() < f64::EPSILON);

    let mut path = rebuild_path(&connections, &start, &end);
    assert_eq!(path.len(), 6);
    let rest = find_path(&grid, end, goal, manhattan).unwrap();
    assert_eq!(rest.len(), 4);
    path.extend(rest.into_iter().skip(1));

    // The jump happens to lie on a shortest path
    let direct = find_path(&grid, start, goal, manhattan).unwrap();
    assert_eq!(path.len(), direct.len());
    assert_eq!(path.last(), Some(&goal));
    assert!(path.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
}
