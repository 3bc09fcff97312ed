//! Placement grid and reflection geometry for trilat lattices.
//!
//! The lattice is drawn on an integer `(row, col)` grid. Every vertex sits
//! in one [`Cell`] and has one of two [`Orientation`]s; the orientation
//! decides which three cells hold its neighbours. [`LatticeGrid`] places
//! vertices, deduplicates vertices reached along different paths, and wires
//! edges and distance relaxations into a [`Graph`](trilat_graph::Graph).
//!
//! # Growth
//!
//! The grid is sparse: occupancy is a coordinate map and the rectangular
//! extent is tracked as [`GridBounds`]. Growing the grid by a row or column
//! is a bound update; no placed vertex ever changes cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod cell;
pub mod error;
pub mod grid;
pub mod orientation;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::{GridBounds, Growth};
pub use cell::Cell;
pub use error::SpaceError;
pub use grid::{Expansion, LatticeGrid};
pub use orientation::Orientation;
