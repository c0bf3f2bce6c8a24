//! Step-driven breadth-first flood fill over wall-editable grids.
//!
//! Wavefill lets a front end toggle walls on a square grid and advance a
//! flood fill one breadth-first wave at a time, rendering each wave's newly
//! reached cells as it goes.
//!
//! # Quick start
//!
//! ```
//! use wavefill::prelude::*;
//!
//! let mut engine = FloodFillEngine::from_config(EngineConfig {
//!     grid_size: 4,
//!     start: Coord::new(0, 0),
//!     walls: vec![Coord::new(1, 1)],
//!     ..EngineConfig::default()
//! })
//! .unwrap();
//!
//! let wave = engine.step().unwrap();
//! assert_eq!(wave.newly_visited, vec![Coord::new(0, 1), Coord::new(1, 0)]);
//! assert_eq!(engine.state_of(1, 1).unwrap(), CellState::Wall);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wavefill-core` | Coordinates, cell state, error types |
//! | [`grid`] | `wavefill-grid` | Bounds-checked cell-state grid |
//! | [`engine`] | `wavefill-engine` | The stepping flood-fill engine and its config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, wave ids, cell state, and errors (`wavefill-core`).
pub use wavefill_core as types;

/// The cell-state grid and neighbour order (`wavefill-grid`).
pub use wavefill_grid as grid;

/// The flood-fill engine, its config, and per-step metrics (`wavefill-engine`).
pub use wavefill_engine as engine;

pub use wavefill_core::{CellState, Coord, EngineError, GridError, StepError, WaveId};
pub use wavefill_engine::{
    ConfigError, EngineConfig, EngineState, ExhaustionPolicy, FloodFillEngine, StepMetrics,
    StepOutcome,
};
pub use wavefill_grid::{Grid, NEIGHBOUR_OFFSETS};

/// Common imports for driving a flood fill.
pub mod prelude {
    pub use wavefill_core::{CellState, Coord, WaveId};
    pub use wavefill_engine::{EngineConfig, ExhaustionPolicy, FloodFillEngine, StepOutcome};
    pub use wavefill_grid::Grid;
}
