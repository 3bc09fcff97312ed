//! Small hand-wired graphs with known shapes.
//!
//! - [`star`]: the root joined to `leaves` leaves.
//! - [`ring`]: a cycle through the root.
//! - [`with_isolated`]: any graph plus one vertex nothing reaches.
//!
//! Distance labels are filled from [`bfs_distances`](crate::bfs_distances),
//! so every fixture except [`with_isolated`] passes `Graph::verify`.

use trilat_core::{Distance, VertexId};
use trilat_graph::Graph;

use crate::bfs_distances;

fn allocate_unlabelled(count: usize) -> Graph {
    let mut g = Graph::with_capacity(count);
    if count > 0 {
        g.allocate(Distance::ZERO);
    }
    for _ in 1..count {
        g.allocate(Distance::INFINITE);
    }
    g
}

/// Copy breadth-first hop counts into the distance labels.
pub fn label(graph: &mut Graph) {
    let hops = bfs_distances(graph);
    // Relax in hop order so each label is final before it propagates.
    let mut order: Vec<VertexId> = (0..graph.vertex_count() as u32).map(VertexId).collect();
    order.sort_by_key(|v| hops[v.index()].unwrap_or(u32::MAX));
    for v in order {
        let ns: Vec<VertexId> = graph.neighbours(v).collect();
        for n in ns {
            graph.relax_edge(v, n);
        }
    }
}

/// The root joined to `leaves` leaves, labelled.
pub fn star(leaves: usize) -> Graph {
    let mut g = allocate_unlabelled(leaves + 1);
    for i in 1..=leaves as u32 {
        g.connect(VertexId::ROOT, VertexId(i));
    }
    label(&mut g);
    g
}

/// A cycle `0 - 1 - ... - (len-1) - 0`, labelled.
///
/// # Panics
///
/// Panics if `len < 3`.
pub fn ring(len: usize) -> Graph {
    assert!(len >= 3, "a ring needs at least three vertices, got {len}");
    let mut g = allocate_unlabelled(len);
    let n = len as u32;
    for i in 0..n {
        g.connect(VertexId(i), VertexId((i + 1) % n));
    }
    label(&mut g);
    g
}

/// `graph` plus one unconnected vertex with an infinite label.
pub fn with_isolated(mut graph: Graph) -> (Graph, VertexId) {
    let id = graph.allocate(Distance::INFINITE);
    (graph, id)
}
