//! Breadth-first growth driver for trilat lattices.
//!
//! Ties the placement grid and the vertex arena together: validates a
//! [`GenerateConfig`], seeds the root, and expands vertices in discovery
//! order until every vertex closer than the depth bound has its three
//! neighbours.
//!
//! Most callers only need [`generate`]. [`generate_with`] exposes the
//! vertex limit, oracle verification and build metrics, and
//! [`LatticeBuilder`] allows stepping one vertex at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod error;
pub mod metrics;

pub use builder::{BuilderState, Lattice, LatticeBuilder, StepOutcome};
pub use config::{ConfigError, GenerateConfig};
pub use error::GenerateError;
pub use metrics::BuildMetrics;

use trilat_graph::Graph;

/// Grow the lattice of every vertex within `depth` hops of the root.
///
/// Negative depths are rejected before anything is allocated.
///
/// # Examples
///
/// ```
/// let graph = trilat_engine::generate(1).unwrap();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.max_degree(), 3);
///
/// assert!(trilat_engine::generate(-1).is_err());
/// ```
pub fn generate(depth: i64) -> Result<Graph, GenerateError> {
    generate_with(GenerateConfig::with_depth(depth)).map(|lattice| lattice.graph)
}

/// Grow a lattice with full control over the configuration.
pub fn generate_with(config: GenerateConfig) -> Result<Lattice, GenerateError> {
    LatticeBuilder::new(config)?.run()
}
