//! Layout fixtures, a reference BFS, and a drive loop.

use std::collections::{HashMap, VecDeque};

use proptest::prelude::*;
use wavefill_core::{CellState, Coord};
use wavefill_engine::{FloodFillEngine, StepOutcome};
use wavefill_grid::Grid;

/// A grid with walls placed plus the designated start cell.
#[derive(Clone, Debug)]
pub struct Layout {
    pub grid: Grid,
    pub start: Coord,
}

impl Layout {
    /// Hand the layout to a fresh engine.
    pub fn engine(&self) -> FloodFillEngine {
        FloodFillEngine::new(self.grid.clone(), self.start)
            .expect("layout start is an empty in-bounds cell")
    }
}

/// Parse a square ASCII layout.
///
/// `.` is empty, `#` is a wall, `S` is the start (exactly one).
/// Surrounding whitespace on each line is ignored; blank lines are skipped.
///
/// ```
/// let layout = wavefill_test_utils::parse_layout(
///     "S.#
///      .#.
///      ...",
/// )
/// .unwrap();
/// assert_eq!(layout.grid.size(), 3);
/// ```
pub fn parse_layout(text: &str) -> Result<Layout, String> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let size = rows.len();
    let mut grid = Grid::new(size as u32).map_err(|e| e.to_string())?;
    let mut start = None;

    for (r, line) in rows.iter().enumerate() {
        let glyphs: Vec<char> = line.chars().collect();
        if glyphs.len() != size {
            return Err(format!(
                "row {r} has {} cells, expected {size}",
                glyphs.len()
            ));
        }
        for (c, glyph) in glyphs.into_iter().enumerate() {
            let (r, c) = (r as i32, c as i32);
            match glyph {
                'S' if start.is_some() => return Err("more than one start".to_string()),
                'S' => start = Some(Coord::new(r, c)),
                _ => match CellState::from_glyph(glyph) {
                    Some(CellState::Empty) => {}
                    Some(CellState::Wall) => {
                        grid.toggle_wall(r, c).map_err(|e| e.to_string())?;
                    }
                    _ => return Err(format!("unexpected glyph {glyph:?} at ({r}, {c})")),
                },
            }
        }
    }

    let start = start.ok_or_else(|| "layout has no start".to_string())?;
    Ok(Layout { grid, start })
}

/// Reference BFS depths from `start`, computed in a single pass.
///
/// Only `Empty` cells are entered; `start` itself maps to 0.
pub fn bfs_depths(grid: &Grid, start: Coord) -> HashMap<Coord, u32> {
    let mut depths = HashMap::new();
    let mut queue = VecDeque::new();
    depths.insert(start, 0);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        let d = depths[&cell];
        for nb in grid.neighbours(cell) {
            if grid.state_at(nb) == Ok(CellState::Empty) && !depths.contains_key(&nb) {
                depths.insert(nb, d + 1);
                queue.push_back(nb);
            }
        }
    }
    depths
}

/// Step `engine` until exhausted, collecting every outcome.
///
/// Panics after `max_steps` calls so that a non-terminating engine
/// fails the test instead of hanging it.
pub fn drive_to_exhaustion(engine: &mut FloodFillEngine, max_steps: usize) -> Vec<StepOutcome> {
    let mut outcomes = Vec::new();
    while !engine.is_exhausted() {
        assert!(
            outcomes.len() < max_steps,
            "engine not exhausted after {max_steps} steps"
        );
        outcomes.push(engine.step().expect("step while running"));
    }
    outcomes
}

/// Random layouts of side `1..=max_size` with roughly a third walls.
///
/// The start cell is always left empty.
pub fn arb_layout(max_size: u32) -> impl Strategy<Value = Layout> {
    (1..=max_size)
        .prop_flat_map(|size| {
            let cells = (size * size) as usize;
            (
                Just(size),
                proptest::collection::vec(proptest::bool::weighted(0.33), cells),
                0..cells,
            )
        })
        .prop_map(|(size, walls, start_idx)| {
            let mut grid = Grid::new(size).expect("size is non-zero");
            let n = size as usize;
            for (i, &wall) in walls.iter().enumerate() {
                if wall && i != start_idx {
                    grid.toggle_wall((i / n) as i32, (i % n) as i32)
                        .expect("fresh cell toggles");
                }
            }
            let start = Coord::new((start_idx / n) as i32, (start_idx % n) as i32);
            Layout { grid, start }
        })
}
