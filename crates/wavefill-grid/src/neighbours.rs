//! 4-connected neighbourhood in a fixed enumeration order.

use smallvec::SmallVec;
use wavefill_core::Coord;

/// `(drow, dcol)` offsets visited for every cell, in order:
/// east, west, south, north.
///
/// The order only affects how newly visited cells are listed within a
/// single wave. The reachable set and each cell's depth do not depend
/// on it.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Inline storage for up to four neighbours.
pub type Neighbours = SmallVec<[Coord; 4]>;

/// Neighbours of `coord` that fall inside a `size x size` grid.
pub(crate) fn in_bounds(coord: Coord, size: u32) -> Neighbours {
    let n = size as i64;
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| coord.offset(dr, dc))
        .filter(|nb| {
            let (r, c) = (i64::from(nb.row), i64::from(nb.col));
            r >= 0 && r < n && c >= 0 && c < n
        })
        .collect()
}
