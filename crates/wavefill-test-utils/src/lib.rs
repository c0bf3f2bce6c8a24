//! Test utilities for Wavefill development.
//!
//! Provides ASCII layout fixtures ([`parse_layout`]), a reference BFS
//! oracle ([`bfs_depths`]) that the stepping engine is checked against,
//! and a caller-side [`drive_to_exhaustion`] loop.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{arb_layout, bfs_depths, drive_to_exhaustion, parse_layout, Layout};
