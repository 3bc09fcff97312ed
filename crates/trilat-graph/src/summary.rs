//! Aggregate statistics over a finished graph.

use crate::graph::Graph;
use std::fmt;
use trilat_core::Vertex;

/// Read-only statistics consumed by reporting layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphSummary {
    /// Number of vertices (rows of the adjacency matrix).
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Largest vertex degree.
    pub max_degree: usize,
    /// Longest natural adjacency row (columns of the adjacency matrix).
    pub max_adjacency_width: usize,
    /// Largest finite distance label, if any vertex has one.
    pub max_distance: Option<u32>,
}

impl GraphSummary {
    /// Compute the summary of `graph`.
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            max_degree: graph.max_degree(),
            max_adjacency_width: graph.max_adjacency_width(),
            max_distance: graph
                .iter()
                .filter_map(|v: &Vertex| v.distance().get())
                .max(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:       {}", self.vertex_count)?;
        writeln!(f, "edges:          {}", self.edge_count)?;
        writeln!(f, "max degree:     {}", self.max_degree)?;
        writeln!(f, "max row width:  {}", self.max_adjacency_width)?;
        match self.max_distance {
            Some(d) => write!(f, "max distance:   {d}"),
            None => write!(f, "max distance:   -"),
        }
    }
}
