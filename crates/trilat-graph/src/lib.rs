//! Vertex arena and read-side queries for trilat lattices.
//!
//! [`Graph`] owns every [`Vertex`](trilat_core::Vertex) and issues their
//! ids. It offers the symmetric `connect` and distance relaxation primitives
//! the lattice grid builds on, plus read-only queries for reporting.
//!
//! # Distance strategies
//!
//! Production growth maintains distance labels incrementally. The
//! [`shortest_path_to_root`](Graph::shortest_path_to_root) oracle recomputes
//! them from scratch with Dijkstra over a [`PriorityFrontier`], and exists to
//! verify the incremental labels, never to produce them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod graph;
pub mod oracle;
pub mod render;
pub mod summary;

pub use frontier::PriorityFrontier;
pub use graph::Graph;
pub use summary::GraphSummary;
