//! Core types for the trilat lattice generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: vertex
//! identifiers, hop-count distance labels, the bit-indexed adjacency set,
//! the [`Vertex`] node type, and the consistency error raised when a
//! finished lattice violates its invariants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod distance;
pub mod error;
pub mod id;
pub mod vertex;

pub use adjacency::AdjacencySet;
pub use distance::Distance;
pub use error::ConsistencyError;
pub use id::VertexId;
pub use vertex::Vertex;
