//! Square cell-state grid for Wavefill.
//!
//! [`Grid`] is the authoritative store of per-cell state. It is a passive
//! data structure: every read and write is bounds-checked, and the only
//! state transitions it permits are wall toggling on non-visited cells
//! and `Empty -> Visited`.
//!
//! Neighbourhood is 4-connected and enumerated in the fixed
//! [`NEIGHBOUR_OFFSETS`] order so that flood-fill output is reproducible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbours;
mod render;

pub use grid::Grid;
pub use neighbours::{Neighbours, NEIGHBOUR_OFFSETS};
