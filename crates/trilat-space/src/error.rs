//! Error types for grid operations.

use std::fmt;
use trilat_core::VertexId;

/// Errors arising from seeding or expanding a lattice grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The vertex to expand has no cell in this grid.
    UnplacedVertex {
        /// The vertex that was not found.
        vertex: VertexId,
    },
    /// A grid can only be seeded into an empty graph.
    GraphNotEmpty {
        /// Vertices already present in the graph.
        vertex_count: usize,
    },
    /// The graph and grid disagree on how many vertices exist, so they do
    /// not belong to the same lattice.
    GraphMismatch {
        /// Vertices placed in the grid.
        placed: usize,
        /// Vertices allocated in the graph.
        allocated: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnplacedVertex { vertex } => {
                write!(f, "vertex {vertex} is not placed in the grid")
            }
            Self::GraphNotEmpty { vertex_count } => {
                write!(f, "cannot seed a graph that already has {vertex_count} vertices")
            }
            Self::GraphMismatch { placed, allocated } => write!(
                f,
                "grid holds {placed} vertices but graph holds {allocated}"
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
