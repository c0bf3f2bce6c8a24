//! Core types and error definitions for the Wavefill flood-fill engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid store and the stepping engine:
//! coordinates, wave counters, per-cell state, and error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::CellState;
pub use error::{EngineError, GridError, StartRejection, StepError};
pub use id::{Coord, WaveId};
