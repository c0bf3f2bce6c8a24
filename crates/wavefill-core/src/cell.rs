//! Per-cell state.

use std::fmt;

/// State of a single grid cell.
///
/// Exactly one state holds per cell at any time. A cell is never both a
/// wall and visited: the grid refuses the transitions that would allow it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Open floor, not yet reached by the flood fill.
    #[default]
    Empty,
    /// Impassable cell placed by the user.
    Wall,
    /// Reached by the flood fill (or the start cell).
    Visited,
}

impl CellState {
    /// Whether the flood fill may enter this cell.
    pub fn is_passable(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Single-character glyph used for ASCII rendering and fixtures.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Visited => 'o',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'o' => Some(Self::Visited),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Wall => write!(f, "wall"),
            Self::Visited => write!(f, "visited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_is_passable() {
        assert!(CellState::Empty.is_passable());
        assert!(!CellState::Wall.is_passable());
        assert!(!CellState::Visited.is_passable());
    }

    #[test]
    fn glyphs_invert() {
        for s in [CellState::Empty, CellState::Wall, CellState::Visited] {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('S'), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
