//! trilat: grow the lattice obtained by reflecting a unit triangle across
//! its edges, labelling every vertex with its hop distance from the root.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all trilat sub-crates. For most users, adding `trilat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trilat::prelude::*;
//!
//! let graph = generate(3).unwrap();
//! assert_eq!(graph.vertex_count(), 19);
//! assert_eq!(graph.max_degree(), 3);
//!
//! let summary = GraphSummary::of(&graph);
//! assert_eq!(summary.max_distance, Some(3));
//!
//! // Every label agrees with a from-scratch shortest-path search.
//! assert_eq!(graph.verify(), Ok(()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trilat-core` | Vertex ids, distances, adjacency sets, consistency errors |
//! | [`graph`] | `trilat-graph` | Vertex arena, oracle, summaries, matrix rendering |
//! | [`space`] | `trilat-space` | Cells, orientations, the placement grid |
//! | [`engine`] | `trilat-engine` | Configuration, the breadth-first builder, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`trilat-core`).
///
/// [`types::VertexId`], [`types::Distance`], [`types::AdjacencySet`],
/// [`types::Vertex`] and [`types::ConsistencyError`].
pub use trilat_core as types;

/// Vertex arena and read-side queries (`trilat-graph`).
///
/// [`graph::Graph`] owns the vertices. The Dijkstra oracle, summaries and
/// the adjacency-matrix renderer are methods and types in this module.
pub use trilat_graph as graph;

/// Placement grid and reflection geometry (`trilat-space`).
pub use trilat_space as space;

/// Breadth-first growth driver (`trilat-engine`).
///
/// [`engine::generate`] for the common case, [`engine::LatticeBuilder`]
/// to step one vertex at a time.
pub use trilat_engine as engine;

/// Common imports for typical trilat usage.
///
/// ```rust
/// use trilat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trilat_core::{Distance, Vertex, VertexId};

    // Errors
    pub use trilat_core::ConsistencyError;
    pub use trilat_engine::{ConfigError, GenerateError};
    pub use trilat_space::SpaceError;

    // Graph
    pub use trilat_graph::{Graph, GraphSummary};

    // Space
    pub use trilat_space::{Cell, LatticeGrid, Orientation};

    // Engine
    pub use trilat_engine::{
        generate, generate_with, BuildMetrics, GenerateConfig, Lattice, LatticeBuilder,
    };
}
