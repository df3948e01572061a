#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ppga::{Grid2D, Node2D, PpgaSearch, manhattan};

/// Structured input for search fuzzing.
#[derive(Arbitrary, Debug)]
struct SearchInput {
    /// Grid width.
    width: u8,
    /// Grid height.
    height: u8,
    /// Wall cells (may be out of bounds).
    walls: Vec<(i8, i8)>,
    /// Start cell (may be out of bounds).
    start: (i8, i8),
    /// Goal cell (may be out of bounds).
    goal: (i8, i8),
}

fuzz_target!(|input: SearchInput| {
    // Cap grid size to keep runs short
    let width = u16::from(input.width % 48);
    let height = u16::from(input.height % 48);
    let mut grid = Grid2D::new(width, height);
    for &(x, y) in input.walls.iter().take(256) {
        grid.add_wall(Node2D::new(i32::from(x), i32::from(y)));
    }

    let start = Node2D::new(i32::from(input.start.0), i32::from(input.start.1));
    let goal = Node2D::new(i32::from(input.goal.0), i32::from(input.goal.1));

    let Ok(mut search) = PpgaSearch::new(&grid, start, goal, manhattan) else {
        assert!(!grid.in_bounds(start) || !grid.in_bounds(goal));
        return;
    };

    let reached = search.run();
    let path = search.path();
    assert_eq!(reached, !path.is_empty());
    if reached {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }
});
