//! Strongly-typed identifiers and the [`Coord`] type.

use std::fmt;

/// A `(row, col)` position on a square grid.
///
/// Components are signed so that out-of-range queries such as `(-1, 0)`
/// can be expressed and rejected by bounds checks instead of wrapping.
/// Ordering is row-major, matching the grid's canonical iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0` at the top.
    pub row: i32,
    /// Column index, `0` at the left.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by `(dr, dc)`.
    ///
    /// Returns `None` if either component would overflow `i32`.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// On an open grid this is the exact BFS depth between two cells;
    /// walls can only make the flood-fill depth larger, never smaller.
    pub fn manhattan(self, other: Coord) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Monotonically increasing wave counter.
///
/// `WaveId(n)` is the BFS depth of the layer expanded by the n-th
/// productive `step()` call. The start cell sits at `WaveId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveId(pub u32);

impl WaveId {
    /// The following wave.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WaveId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
