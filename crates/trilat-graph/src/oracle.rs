//! Recompute-from-scratch shortest paths, used to verify growth labels.
//!
//! Each query runs Dijkstra over the whole graph (O(V log V)), so the oracle
//! is for tests and opt-in verification only. Growth never consults it.

use crate::frontier::PriorityFrontier;
use crate::graph::Graph;
use trilat_core::{ConsistencyError, Distance, VertexId};

impl Graph {
    /// Hop count from `vertex` to the root, recomputed with Dijkstra.
    ///
    /// The root answers 0 and a direct neighbour of the root answers 1
    /// without searching. Otherwise the search runs outward from `vertex`
    /// with unit edge weights and stops as soon as the root is popped.
    ///
    /// Returns `None` if the frontier empties first or `vertex` is not in
    /// the graph. On a lattice produced by the builder this never happens;
    /// callers treat `None` as [`ConsistencyError::Unreachable`].
    pub fn shortest_path_to_root(&self, vertex: VertexId) -> Option<u32> {
        self.vertex(vertex)?;
        if vertex.is_root() {
            return Some(0);
        }
        if self.are_connected(VertexId::ROOT, vertex) {
            return Some(1);
        }

        // A simple path never exceeds the vertex count.
        let unreached = self.vertex_count() as u32 + 1;
        let mut dist = vec![unreached; self.vertex_count()];
        let mut frontier = PriorityFrontier::with_capacity(self.vertex_count());
        dist[vertex.index()] = 0;
        frontier.push(0u32, vertex);

        while let Some((d, node)) = frontier.pop_with_priority() {
            if node.is_root() {
                return Some(d);
            }
            if d > dist[node.index()] {
                continue;
            }
            for next in self.neighbours(node) {
                let alt = d + 1;
                if alt < dist[next.index()] {
                    dist[next.index()] = alt;
                    frontier.push(alt, next);
                }
            }
        }
        None
    }

    /// Check every vertex's label against [`shortest_path_to_root`](Self::shortest_path_to_root).
    ///
    /// Stops at the first disagreement. An empty graph is trivially consistent.
    pub fn verify_distances(&self) -> Result<(), ConsistencyError> {
        let Some(root) = self.root() else {
            return Ok(());
        };
        if root.distance() != Distance::ZERO {
            return Err(ConsistencyError::RootDistance {
                found: root.distance(),
            });
        }
        for v in self.iter() {
            let recomputed = self
                .shortest_path_to_root(v.id())
                .ok_or(ConsistencyError::Unreachable { vertex: v.id() })?;
            if v.distance().get() != Some(recomputed) {
                return Err(ConsistencyError::DistanceMismatch {
                    vertex: v.id(),
                    label: v.distance(),
                    recomputed,
                });
            }
        }
        Ok(())
    }

    /// Check that every recorded edge is recorded on both endpoints.
    pub fn verify_symmetry(&self) -> Result<(), ConsistencyError> {
        for v in self.iter() {
            for n in v.adjacency().iter() {
                if !self.are_connected(n, v.id()) {
                    return Err(ConsistencyError::AsymmetricEdge {
                        from: v.id(),
                        to: n,
                    });
                }
            }
        }
        Ok(())
    }

    /// Run every consistency check: symmetry first, then distances.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        self.verify_symmetry()?;
        self.verify_distances()
    }
}
