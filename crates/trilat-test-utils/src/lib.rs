//! Test utilities and graph fixtures for trilat development.
//!
//! Provides an independent breadth-first reference for distance labels,
//! a combined invariant checker for grown lattices, and small hand-wired
//! graphs in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use trilat_core::{Distance, VertexId};
use trilat_graph::Graph;

/// Number of vertices within `depth` hops of the root: `1 + 3 + 6 + ... + 3·depth`.
pub fn expected_vertex_count(depth: u32) -> usize {
    let n = depth as usize;
    1 + 3 * n * (n + 1) / 2
}

/// Hop counts from the root by plain breadth-first search, in id order.
///
/// `None` marks a vertex the root cannot reach. Shares no code with the
/// graph's own Dijkstra oracle.
pub fn bfs_distances(graph: &Graph) -> Vec<Option<u32>> {
    let mut dist = vec![None; graph.vertex_count()];
    if graph.is_empty() {
        return dist;
    }
    dist[VertexId::ROOT.index()] = Some(0);
    let mut queue = VecDeque::from([VertexId::ROOT]);
    while let Some(v) = queue.pop_front() {
        let next = dist[v.index()].map(|d| d + 1);
        for n in graph.neighbours(v) {
            if dist[n.index()].is_none() {
                dist[n.index()] = next;
                queue.push_back(n);
            }
        }
    }
    dist
}

/// Walk from `vertex` to the root, always stepping to a neighbour whose
/// label is one lower. Returns the visited vertices, `vertex` first.
///
/// Returns `None` if the walk gets stuck, which means the labels do not
/// describe a shortest-path tree.
pub fn descend_to_root(graph: &Graph, vertex: VertexId) -> Option<Vec<VertexId>> {
    let mut path = vec![vertex];
    let mut current = vertex;
    while !current.is_root() {
        let d = graph.distance(current)?.get()?;
        let below = Distance::finite(d.checked_sub(1)?);
        current = graph
            .neighbours(current)
            .find(|&n| graph.distance(n) == Some(below))?;
        path.push(current);
    }
    Some(path)
}

/// Assert every invariant a lattice grown to `depth` must satisfy.
///
/// - root is id 0 at distance 0;
/// - adjacency is symmetric, no vertex has degree above three;
/// - labels agree with [`bfs_distances`] and with the Dijkstra oracle;
/// - no label exceeds `depth + 1`, and every vertex can descend to the root
///   in exactly `distance` steps;
/// - the vertex count follows the honeycomb ring sizes.
pub fn assert_lattice_invariants(graph: &Graph, depth: u32) {
    let root = graph.root().expect("lattice has a root");
    assert_eq!(root.id(), VertexId::ROOT);
    assert_eq!(root.distance(), Distance::ZERO);

    assert_eq!(graph.verify_symmetry(), Ok(()));
    assert!(graph.max_degree() <= 3, "degree {}", graph.max_degree());

    let reference = bfs_distances(graph);
    for v in graph.iter() {
        let label = v.distance().get();
        assert_eq!(label, reference[v.id().index()], "vertex {} label vs bfs", v.id());
        assert_eq!(
            label,
            graph.shortest_path_to_root(v.id()),
            "vertex {} label vs oracle",
            v.id()
        );
        let hops = label.unwrap_or_else(|| panic!("vertex {} unreachable", v.id()));
        assert!(hops <= depth + 1, "vertex {} at {hops} > {}", v.id(), depth + 1);

        let path = descend_to_root(graph, v.id())
            .unwrap_or_else(|| panic!("vertex {} cannot descend to the root", v.id()));
        assert_eq!(path.len() as u32, hops + 1);
    }

    assert_eq!(graph.vertex_count(), expected_vertex_count(depth));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honeycomb_counts() {
        let counts: Vec<usize> = (0..5).map(expected_vertex_count).collect();
        assert_eq!(counts, vec![1, 4, 10, 19, 31]);
    }

    #[test]
    fn bfs_on_empty_graph() {
        assert!(bfs_distances(&Graph::new()).is_empty());
    }

    #[test]
    fn descend_follows_shorter_side_of_ring() {
        let g = fixtures::ring(5);
        let path = descend_to_root(&g, VertexId(3)).unwrap();
        assert_eq!(path, vec![VertexId(3), VertexId(4), VertexId::ROOT]);
    }

    #[test]
    fn descend_fails_on_bad_labels() {
        let (g, lonely) = fixtures::with_isolated(fixtures::star(1));
        assert_eq!(descend_to_root(&g, lonely), None);
    }
}
