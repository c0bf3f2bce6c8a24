//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] describes a whole session up front: grid size, start
//! cell, initial walls, and the exhaustion policy.
//! [`validate()`](EngineConfig::validate) checks every structural
//! invariant before any grid is allocated;
//! [`FloodFillEngine::from_config`](crate::FloodFillEngine::from_config)
//! builds the engine from a validated config.

use std::error::Error;
use std::fmt;

use indexmap::IndexSet;
use wavefill_core::{Coord, EngineError, GridError, StartRejection};
use wavefill_grid::Grid;

// ── ExhaustionPolicy ───────────────────────────────────────────────

/// What `step()` does once the frontier is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Return an empty outcome with `exhausted = true`.
    #[default]
    NoOp,
    /// Fail with [`StepError::NoMoreSteps`](wavefill_core::StepError::NoMoreSteps).
    Strict,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid size is zero or too large.
    Grid(GridError),
    /// An initial wall lies outside the grid.
    WallOutOfBounds {
        /// The offending wall.
        coord: Coord,
    },
    /// The same wall is listed twice; toggling it twice would cancel out.
    DuplicateWall {
        /// The repeated wall.
        coord: Coord,
    },
    /// The start cell is listed as a wall.
    StartIsWall {
        /// The start coordinate.
        coord: Coord,
    },
    /// Engine construction failed.
    Engine(EngineError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::WallOutOfBounds { coord } => write!(f, "wall {coord} is outside the grid"),
            Self::DuplicateWall { coord } => write!(f, "wall {coord} listed more than once"),
            Self::StartIsWall { coord } => write!(f, "start {coord} is listed as a wall"),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<EngineError> for ConfigError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete description of a flood-fill session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square grid. Default: 10.
    pub grid_size: u32,
    /// Origin of the flood fill. Default: `(0, 0)`.
    pub start: Coord,
    /// Cells that start out as walls. Default: none.
    pub walls: Vec<Coord>,
    /// Behaviour of `step()` after exhaustion. Default: [`ExhaustionPolicy::NoOp`].
    pub exhaustion: ExhaustionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            start: Coord::new(0, 0),
            walls: Vec::new(),
            exhaustion: ExhaustionPolicy::NoOp,
        }
    }
}

impl EngineConfig {
    /// Check all structural invariants.
    ///
    /// Order of checks: grid size, start bounds, then each wall in
    /// listing order (bounds, duplicates, collision with the start).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if self.grid_size > Grid::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: self.grid_size,
                max: Grid::MAX_SIZE,
            }
            .into());
        }
        if !self.in_bounds(self.start) {
            return Err(EngineError::InvalidStart {
                coord: self.start,
                reason: StartRejection::OutOfBounds,
            }
            .into());
        }
        let mut seen = IndexSet::with_capacity(self.walls.len());
        for &coord in &self.walls {
            if !self.in_bounds(coord) {
                return Err(ConfigError::WallOutOfBounds { coord });
            }
            if !seen.insert(coord) {
                return Err(ConfigError::DuplicateWall { coord });
            }
            if coord == self.start {
                return Err(ConfigError::StartIsWall { coord });
            }
        }
        Ok(())
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        let n = i64::from(self.grid_size);
        let (r, c) = (i64::from(coord.row), i64::from(coord.col));
        r >= 0 && r < n && c >= 0 && c < n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.grid_size, 10);
        assert_eq!(cfg.start, c(0, 0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        let cfg = EngineConfig {
            grid_size: 0,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn oversized_rejected() {
        let cfg = EngineConfig {
            grid_size: Grid::MAX_SIZE + 1,
            ..EngineConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::DimensionTooLarge { .. }))
        ));
    }

    #[test]
    fn start_out_of_bounds_rejected() {
        let cfg = EngineConfig {
            grid_size: 3,
            start: c(3, 0),
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Engine(EngineError::InvalidStart {
                coord: c(3, 0),
                reason: StartRejection::OutOfBounds,
            }))
        );
    }

    #[test]
    fn wall_out_of_bounds_rejected() {
        let cfg = EngineConfig {
            grid_size: 3,
            walls: vec![c(1, 1), c(-1, 2)],
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::WallOutOfBounds { coord: c(-1, 2) })
        );
    }

    #[test]
    fn duplicate_wall_rejected() {
        let cfg = EngineConfig {
            grid_size: 3,
            walls: vec![c(1, 1), c(2, 2), c(1, 1)],
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateWall { coord: c(1, 1) })
        );
    }

    #[test]
    fn start_listed_as_wall_rejected() {
        let cfg = EngineConfig {
            grid_size: 3,
            start: c(1, 1),
            walls: vec![c(1, 1)],
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::StartIsWall { coord: c(1, 1) })
        );
    }

    #[test]
    fn config_error_display_and_source() {
        let e = ConfigError::DuplicateWall { coord: c(0, 1) };
        assert_eq!(e.to_string(), "wall (0, 1) listed more than once");
        assert!(e.source().is_none());
        assert!(ConfigError::Grid(GridError::EmptyGrid).source().is_some());
    }
}
