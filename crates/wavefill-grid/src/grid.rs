//! The [`Grid`] cell-state store.

use log::trace;
use wavefill_core::{CellState, Coord, GridError};

use crate::neighbours::{self, Neighbours};

/// A square grid mapping `(row, col)` in `[0, size) x [0, size)` to a
/// [`CellState`].
///
/// Cells are stored row-major. The grid owns all cell state; callers
/// mutate it only through [`toggle_wall`](Grid::toggle_wall),
/// [`mark_visited`](Grid::mark_visited) and
/// [`clear_visited`](Grid::clear_visited).
///
/// # Examples
///
/// ```
/// use wavefill_core::{CellState, GridError};
/// use wavefill_grid::Grid;
///
/// let mut grid = Grid::new(3).unwrap();
/// assert_eq!(grid.toggle_wall(1, 1).unwrap(), CellState::Wall);
/// assert_eq!(grid.state_of(1, 1).unwrap(), CellState::Wall);
/// assert!(matches!(grid.state_of(3, 0), Err(GridError::OutOfBounds { .. })));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Largest accepted side length.
    pub const MAX_SIZE: u32 = 1 << 15;

    /// Create a `size x size` grid with every cell `Empty`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `size == 0` and
    /// `Err(GridError::DimensionTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        let n = size as usize;
        Ok(Self {
            size,
            cells: vec![CellState::Empty; n * n],
        })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        let n = self.size as i64;
        let (r, c) = (i64::from(coord.row), i64::from(coord.col));
        r >= 0 && r < n && c >= 0 && c < n
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(coord.row as usize * self.size as usize + coord.col as usize)
    }

    /// State of the cell at `(row, col)`.
    pub fn state_of(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.state_at(Coord::new(row, col))
    }

    /// State of the cell at `coord`.
    pub fn state_at(&self, coord: Coord) -> Result<CellState, GridError> {
        let i = self.index(coord)?;
        Ok(self.cells[i])
    }

    /// Flip the cell at `(row, col)` between `Empty` and `Wall`.
    ///
    /// Returns the new state. A `Visited` cell is refused with
    /// `GridError::InvalidState` and left untouched, so a cell is never
    /// both a wall and part of the filled region.
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> Result<CellState, GridError> {
        let coord = Coord::new(row, col);
        let i = self.index(coord)?;
        let next = match self.cells[i] {
            CellState::Empty => CellState::Wall,
            CellState::Wall => CellState::Empty,
            state @ CellState::Visited => {
                return Err(GridError::InvalidState { coord, state });
            }
        };
        self.cells[i] = next;
        trace!("toggled {coord} to {next}");
        Ok(next)
    }

    /// Transition the cell at `(row, col)` from `Empty` to `Visited`.
    ///
    /// Callers check [`state_of`](Self::state_of) first; a `Wall` or an
    /// already `Visited` cell is refused with `GridError::InvalidTransition`.
    pub fn mark_visited(&mut self, row: i32, col: i32) -> Result<(), GridError> {
        let coord = Coord::new(row, col);
        let i = self.index(coord)?;
        match self.cells[i] {
            CellState::Empty => {
                self.cells[i] = CellState::Visited;
                Ok(())
            }
            from => Err(GridError::InvalidTransition { coord, from }),
        }
    }

    /// Return every `Visited` cell to `Empty`, keeping walls.
    ///
    /// Returns the number of cells cleared.
    pub fn clear_visited(&mut self) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == CellState::Visited) {
            *cell = CellState::Empty;
            cleared += 1;
        }
        cleared
    }

    /// In-bounds 4-connected neighbours of `coord`, in
    /// [`NEIGHBOUR_OFFSETS`](crate::NEIGHBOUR_OFFSETS) order.
    pub fn neighbours(&self, coord: Coord) -> Neighbours {
        neighbours::in_bounds(coord, self.size)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let n = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new((i / n) as i32, (i % n) as i32), state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_grid_is_all_empty() {
        let g = Grid::new(10).unwrap();
        assert_eq!(g.size(), 10);
        assert_eq!(g.cell_count(), 100);
        assert_eq!(g.count(CellState::Empty), 100);
    }

    #[test]
    fn new_zero_returns_error() {
        assert_eq!(Grid::new(0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_oversized() {
        assert!(matches!(
            Grid::new(Grid::MAX_SIZE + 1),
            Err(GridError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::new(1).unwrap();
        assert_eq!(g.state_of(0, 0).unwrap(), CellState::Empty);
        assert!(g.neighbours(Coord::new(0, 0)).is_empty());
    }

    // ── Bounds ──────────────────────────────────────────────────

    #[test]
    fn state_of_out_of_bounds() {
        let g = Grid::new(4).unwrap();
        for (r, c) in [(-1, 0), (4, 0), (0, -1), (0, 4), (i32::MIN, i32::MAX)] {
            assert_eq!(
                g.state_of(r, c),
                Err(GridError::OutOfBounds {
                    coord: Coord::new(r, c),
                    size: 4
                })
            );
        }
    }

    #[test]
    fn mutations_out_of_bounds_leave_grid_untouched() {
        let mut g = Grid::new(2).unwrap();
        let before = g.clone();
        assert!(g.toggle_wall(2, 0).is_err());
        assert!(g.mark_visited(0, -1).is_err());
        assert_eq!(g, before);
    }

    // ── Wall toggling ───────────────────────────────────────────

    #[test_log::test]
    fn toggle_flips_between_empty_and_wall() {
        let mut g = Grid::new(3).unwrap();
        assert_eq!(g.toggle_wall(0, 1).unwrap(), CellState::Wall);
        assert_eq!(g.toggle_wall(0, 1).unwrap(), CellState::Empty);
        assert_eq!(g.state_of(0, 1).unwrap(), CellState::Empty);
    }

    #[test]
    fn toggle_visited_is_rejected() {
        let mut g = Grid::new(3).unwrap();
        g.mark_visited(1, 1).unwrap();
        assert_eq!(
            g.toggle_wall(1, 1),
            Err(GridError::InvalidState {
                coord: Coord::new(1, 1),
                state: CellState::Visited
            })
        );
        assert_eq!(g.state_of(1, 1).unwrap(), CellState::Visited);
    }

    // ── Visiting ────────────────────────────────────────────────

    #[test]
    fn mark_visited_from_empty() {
        let mut g = Grid::new(3).unwrap();
        g.mark_visited(2, 2).unwrap();
        assert_eq!(g.state_of(2, 2).unwrap(), CellState::Visited);
    }

    #[test]
    fn mark_visited_rejects_wall_and_visited() {
        let mut g = Grid::new(3).unwrap();
        g.toggle_wall(0, 0).unwrap();
        assert_eq!(
            g.mark_visited(0, 0),
            Err(GridError::InvalidTransition {
                coord: Coord::new(0, 0),
                from: CellState::Wall
            })
        );
        g.mark_visited(0, 1).unwrap();
        assert_eq!(
            g.mark_visited(0, 1),
            Err(GridError::InvalidTransition {
                coord: Coord::new(0, 1),
                from: CellState::Visited
            })
        );
    }

    #[test]
    fn clear_visited_keeps_walls() {
        let mut g = Grid::new(3).unwrap();
        g.toggle_wall(1, 1).unwrap();
        g.mark_visited(0, 0).unwrap();
        g.mark_visited(2, 2).unwrap();
        assert_eq!(g.clear_visited(), 2);
        assert_eq!(g.count(CellState::Visited), 0);
        assert_eq!(g.state_of(1, 1).unwrap(), CellState::Wall);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new(2).unwrap();
        g.toggle_wall(1, 0).unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Coord::new(0, 0), CellState::Empty),
                (Coord::new(0, 1), CellState::Empty),
                (Coord::new(1, 0), CellState::Wall),
                (Coord::new(1, 1), CellState::Empty),
            ]
        );
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(size in 1u32..12, r in 0i32..12, col in 0i32..12) {
            let g = Grid::new(size).unwrap();
            let coord = Coord::new(r % size as i32, col % size as i32);
            for nb in g.neighbours(coord) {
                prop_assert!(g.contains(nb));
                prop_assert_eq!(nb.manhattan(coord), 1);
                prop_assert!(g.neighbours(nb).contains(&coord));
            }
        }

        #[test]
        fn wall_and_visited_never_coexist(
            size in 1u32..8,
            ops in proptest::collection::vec((0u8..2, 0i32..8, 0i32..8), 0..64),
        ) {
            let mut g = Grid::new(size).unwrap();
            let mut visited = std::collections::HashSet::new();
            for (op, r, c) in ops {
                let (r, c) = (r % size as i32, c % size as i32);
                if op == 0 {
                    let _ = g.toggle_wall(r, c);
                } else if g.mark_visited(r, c).is_ok() {
                    visited.insert(Coord::new(r, c));
                }
            }
            for coord in visited {
                prop_assert_eq!(g.state_at(coord).unwrap(), CellState::Visited);
            }
        }
    }
}
