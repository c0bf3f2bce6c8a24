//! Error types for the Wavefill flood-fill engine.
//!
//! Organized by subsystem: grid storage, engine construction, and
//! stepping. Every error is local and deterministic; there is no
//! transient failure mode to retry.

use std::error::Error;
use std::fmt;

use crate::cell::CellState;
use crate::id::{Coord, WaveId};

/// Errors from grid construction and per-cell operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside `[0, size) x [0, size)`.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: u32,
    },
    /// A wall toggle was requested on a cell that is neither `Empty`
    /// nor `Wall`.
    InvalidState {
        /// The cell that was targeted.
        coord: Coord,
        /// Its state at the time of the request.
        state: CellState,
    },
    /// `mark_visited` was called on a cell that is not `Empty`.
    InvalidTransition {
        /// The cell that was targeted.
        coord: Coord,
        /// Its state at the time of the request.
        from: CellState,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The requested side length exceeds the grid's maximum
    /// (`Grid::MAX_SIZE`, 32768 cells per side).
    DimensionTooLarge {
        /// The requested side length.
        value: u32,
        /// Largest accepted side length.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::InvalidState { coord, state } => {
                write!(f, "cannot toggle wall at {coord}: cell is {state}")
            }
            Self::InvalidTransition { coord, from } => {
                write!(f, "cannot mark {coord} visited: cell is {from}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Why a start coordinate was refused at engine construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRejection {
    /// The start lies outside the grid.
    OutOfBounds,
    /// The start cell is not `Empty`.
    NotEmpty(CellState),
}

impl fmt::Display for StartRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "outside the grid"),
            Self::NotEmpty(state) => write!(f, "cell is {state}"),
        }
    }
}

/// Errors from constructing or mutating a flood-fill engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The start coordinate is out of bounds or not an empty cell.
    InvalidStart {
        /// The rejected start coordinate.
        coord: Coord,
        /// What disqualified it.
        reason: StartRejection,
    },
    /// A grid operation issued through the engine failed.
    Grid(GridError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { coord, reason } => {
                write!(f, "invalid start {coord}: {reason}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidStart { .. } => None,
        }
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from `step()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The frontier is exhausted and the engine runs the strict policy.
    NoMoreSteps {
        /// The last wave that was expanded.
        last_wave: WaveId,
    },
    /// The grid rejected a visit the engine believed valid.
    Grid(GridError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMoreSteps { last_wave } => {
                write!(f, "frontier exhausted after wave {last_wave}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::NoMoreSteps { .. } => None,
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
