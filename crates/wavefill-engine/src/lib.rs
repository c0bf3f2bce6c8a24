//! Incremental flood-fill engine for Wavefill.
//!
//! [`FloodFillEngine`] owns a [`Grid`](wavefill_grid::Grid) and a FIFO
//! frontier seeded with a single start cell. Each call to
//! [`step()`](FloodFillEngine::step) expands exactly one breadth-first
//! layer and reports the cells it reached, so an external driver (a
//! button, a timer, a test loop) decides the pace of the search.
//!
//! There is no background execution. Running to completion is a
//! caller-side loop over `step()` until
//! [`is_exhausted()`](FloodFillEngine::is_exhausted).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;

pub use config::{ConfigError, EngineConfig, ExhaustionPolicy};
pub use engine::{EngineState, FloodFillEngine, StepOutcome};
pub use metrics::StepMetrics;
