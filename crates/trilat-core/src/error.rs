//! Error types for lattice consistency checks.
//!
//! Construction itself cannot fail on valid input; these errors report a
//! finished lattice that breaks one of its invariants, which always points
//! at a defect in the growth engine rather than at caller input.

use crate::distance::Distance;
use crate::id::VertexId;
use std::error::Error;
use std::fmt;

/// A finished lattice violates one of its structural invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The recompute oracle exhausted its frontier without reaching the root.
    Unreachable {
        /// The vertex whose search failed.
        vertex: VertexId,
    },
    /// The incrementally maintained label disagrees with the oracle.
    DistanceMismatch {
        /// The offending vertex.
        vertex: VertexId,
        /// Label produced during growth.
        label: Distance,
        /// Distance recomputed from scratch.
        recomputed: u32,
    },
    /// An edge is recorded on only one endpoint.
    AsymmetricEdge {
        /// Endpoint that records the edge.
        from: VertexId,
        /// Endpoint that does not.
        to: VertexId,
    },
    /// The root's label is not zero.
    RootDistance {
        /// Label found on the root.
        found: Distance,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { vertex } => {
                write!(f, "vertex {vertex} cannot reach the root")
            }
            Self::DistanceMismatch {
                vertex,
                label,
                recomputed,
            } => write!(
                f,
                "vertex {vertex} is labelled {label} but lies {recomputed} hops from the root"
            ),
            Self::AsymmetricEdge { from, to } => {
                write!(f, "edge {from} -> {to} has no reverse edge")
            }
            Self::RootDistance { found } => {
                write!(f, "root distance is {found}, expected 0")
            }
        }
    }
}

impl Error for ConsistencyError {}
