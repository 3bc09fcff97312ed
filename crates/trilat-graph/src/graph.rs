//! The vertex arena.

use trilat_core::{Distance, Vertex, VertexId};

/// All vertices of a lattice, indexed densely by [`VertexId`].
///
/// The arena is the only issuer of ids: [`allocate`](Graph::allocate) hands
/// out `0, 1, 2, ...` in order, so the first vertex allocated is the root.
/// Edges are addressed by id on both sides, which keeps adjacent vertices
/// free of references to one another.
///
/// Methods taking a `VertexId` that must already exist panic on an unknown
/// id; such an id can only come from a different graph.
///
/// # Examples
///
/// ```
/// use trilat_core::{Distance, VertexId};
/// use trilat_graph::Graph;
///
/// let mut g = Graph::new();
/// let root = g.allocate(Distance::ZERO);
/// let leaf = g.allocate(Distance::INFINITE);
/// assert!(g.connect(root, leaf));
/// assert!(!g.connect(leaf, root));
/// assert_eq!(g.relax_edge(root, leaf), 1);
/// assert_eq!(g.distance(leaf), Some(Distance::finite(1)));
/// assert!(g.are_connected(leaf, root));
/// assert_eq!(root, VertexId::ROOT);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
        }
    }

    /// Create a vertex with the next unused id and the given distance label.
    ///
    /// # Panics
    ///
    /// Panics once `u32::MAX` vertices exist.
    pub fn allocate(&mut self, distance: Distance) -> VertexId {
        assert!(
            self.vertices.len() < u32::MAX as usize,
            "vertex id space exhausted"
        );
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(id, distance));
        id
    }

    /// The id the next [`allocate`](Self::allocate) call will return.
    pub fn next_id(&self) -> VertexId {
        VertexId(self.vertices.len() as u32)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been allocated.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a vertex.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// The root vertex, if allocated.
    pub fn root(&self) -> Option<&Vertex> {
        self.vertex(VertexId::ROOT)
    }

    /// All vertices in id order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterate vertices in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Distance label of `id`.
    pub fn distance(&self, id: VertexId) -> Option<Distance> {
        self.vertex(id).map(Vertex::distance)
    }

    /// Distance labels in id order.
    pub fn distances(&self) -> Vec<Distance> {
        self.vertices.iter().map(Vertex::distance).collect()
    }

    /// Neighbours of `id` in ascending id order. Unknown ids have none.
    pub fn neighbours(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|v| v.adjacency().iter())
    }

    /// Returns `true` iff `a` records an edge to `b`.
    ///
    /// Symmetric by construction; unknown ids are never connected.
    pub fn are_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).is_some_and(|v| v.is_adjacent(b))
    }

    /// Add the undirected edge `a`–`b`.
    ///
    /// Idempotent from either endpoint. Returns `true` if the edge is new.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown or if `a == b`.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> bool {
        assert_ne!(a, b, "cannot connect vertex {a} to itself");
        let forward = self.vertices[a.index()].link(b);
        let backward = self.vertices[b.index()].link(a);
        debug_assert_eq!(forward, backward, "asymmetric edge {a}-{b}");
        forward
    }

    /// Relax both labels across the edge `a`–`b`.
    ///
    /// `d(a) = min(d(a), d(b) + 1)` then `d(b) = min(d(b), d(a) + 1)`.
    /// Returns how many labels were lowered (0, 1 or 2).
    pub fn relax_edge(&mut self, a: VertexId, b: VertexId) -> u32 {
        debug_assert!(self.are_connected(a, b), "relaxing across non-edge {a}-{b}");
        let via_b = self.vertices[b.index()].distance().successor();
        let lowered_a = self.vertices[a.index()].relax(via_b);
        let via_a = self.vertices[a.index()].distance().successor();
        let lowered_b = self.vertices[b.index()].relax(via_a);
        u32::from(lowered_a) + u32::from(lowered_b)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Largest vertex degree, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).max().unwrap_or(0)
    }

    /// Longest natural adjacency row over all vertices.
    pub fn max_adjacency_width(&self) -> usize {
        self.vertices
            .iter()
            .map(Vertex::adjacency_width)
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
