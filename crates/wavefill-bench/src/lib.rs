//! Reference layouts shared by the Wavefill benchmarks and demos.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use wavefill_core::GridError;
use wavefill_grid::Grid;

/// Open `size x size` grid with no walls.
pub fn open_grid(size: u32) -> Result<Grid, GridError> {
    Grid::new(size)
}

/// Serpentine maze: every odd row is a wall with a single gap that
/// alternates between the right and left edge.
///
/// Starting from `(0, 0)` the fill walks the whole snake, so the number
/// of waves grows with the cell count instead of the diagonal.
pub fn serpentine(size: u32) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size)?;
    let last = size as i32 - 1;
    for row in (1..size as i32).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { last } else { 0 };
        for col in (0..=last).filter(|&c| c != gap) {
            grid.toggle_wall(row, col)?;
        }
    }
    Ok(grid)
}
