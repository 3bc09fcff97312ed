//! The lattice vertex: identity, adjacency and distance label.

use crate::adjacency::AdjacencySet;
use crate::distance::Distance;
use crate::id::VertexId;

/// A node of the generated lattice.
///
/// A vertex records only its own half of each edge. The symmetric
/// `connect` operation lives on the graph arena, which owns both endpoints;
/// [`link`](Vertex::link) is the one-directional primitive it is built on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    adjacency: AdjacencySet,
    distance: Distance,
}

impl Vertex {
    /// A fresh vertex with no edges and the given distance label.
    pub fn new(id: VertexId, distance: Distance) -> Self {
        Self {
            id,
            adjacency: AdjacencySet::new(),
            distance,
        }
    }

    /// This vertex's id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Current best known distance from the root.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Neighbour set.
    pub fn adjacency(&self) -> &AdjacencySet {
        &self.adjacency
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if an edge to `other` is recorded on this side.
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacency.contains(other)
    }

    /// Record this side of an edge to `other`. Returns `true` if new.
    pub fn link(&mut self, other: VertexId) -> bool {
        debug_assert_ne!(other, self.id, "self-loop on vertex {}", self.id);
        self.adjacency.insert(other)
    }

    /// Lower the distance label to `candidate` if it is smaller.
    ///
    /// Returns `true` if the label changed.
    pub fn relax(&mut self, candidate: Distance) -> bool {
        if candidate < self.distance {
            self.distance = candidate;
            true
        } else {
            false
        }
    }

    /// Length of this vertex's natural adjacency row (highest neighbour id + 1).
    pub fn adjacency_width(&self) -> usize {
        self.adjacency.width()
    }

    /// Adjacency as a 0/1 row padded with zeros to `width`.
    pub fn adjacency_row(&self, width: usize) -> Vec<u8> {
        self.adjacency.row(width)
    }
}
