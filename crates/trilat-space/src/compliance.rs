//! Grid/graph compliance test helpers.
//!
//! These functions verify that a grid and the graph it wired satisfy the
//! placement and geometry invariants. Reused across the grid test modules.

use crate::cell::Cell;
use crate::grid::LatticeGrid;
use crate::orientation::Orientation;
use indexmap::IndexSet;
use trilat_core::VertexId;
use trilat_graph::Graph;

/// Assert that every vertex occupies exactly one cell and vice versa.
pub fn assert_one_cell_per_vertex(grid: &LatticeGrid, graph: &Graph) {
    assert_eq!(
        grid.len(),
        graph.vertex_count(),
        "grid holds {} vertices, graph holds {}",
        grid.len(),
        graph.vertex_count()
    );
    let cells: IndexSet<Cell> = grid.occupied().map(|(cell, _)| cell).collect();
    assert_eq!(cells.len(), grid.len(), "two vertices share a cell");
    for v in graph.iter() {
        let cell = grid
            .cell_of(v.id())
            .unwrap_or_else(|| panic!("vertex {} has no cell", v.id()));
        assert_eq!(
            grid.vertex_at(cell),
            Some(v.id()),
            "cell {cell} does not map back to vertex {}",
            v.id()
        );
    }
}

/// Assert that occupied cells are listed in vertex-id order.
pub fn assert_placement_in_id_order(grid: &LatticeGrid) {
    for (i, (_, id)) in grid.occupied().enumerate() {
        assert_eq!(id, VertexId(i as u32), "placement order broken at {i}");
    }
}

/// Assert that the bounds cover every occupied cell.
pub fn assert_bounds_cover_cells(grid: &LatticeGrid) {
    let bounds = grid.bounds();
    for (cell, id) in grid.occupied() {
        assert!(
            bounds.contains(cell),
            "vertex {id} at {cell} lies outside {bounds:?}"
        );
    }
}

/// Assert that every edge joins two cells one lattice step apart, with the
/// endpoints in opposite orientations.
pub fn assert_edges_follow_geometry(grid: &LatticeGrid, graph: &Graph) {
    for v in graph.iter() {
        let cell = grid.cell_of(v.id()).expect("placed vertex");
        for n in v.adjacency().iter() {
            let other = grid.cell_of(n).expect("placed neighbour");
            let offset = (other.row - cell.row, other.col - cell.col);
            let up = Orientation::ApexUp.offsets().contains(&offset);
            let down = Orientation::ApexDown.offsets().contains(&offset);
            assert!(
                up || down,
                "edge {}-{n} spans {cell} -> {other}, not a lattice step",
                v.id()
            );
        }
    }
}

/// Assert that no vertex has more than three neighbours.
pub fn assert_degree_at_most_three(graph: &Graph) {
    for v in graph.iter() {
        assert!(v.degree() <= 3, "vertex {} has degree {}", v.id(), v.degree());
    }
}

/// Run all compliance checks, including the graph's own symmetry check.
pub fn run_full_compliance(grid: &LatticeGrid, graph: &Graph) {
    assert_one_cell_per_vertex(grid, graph);
    assert_placement_in_id_order(grid);
    assert_bounds_cover_cells(grid);
    assert_edges_follow_geometry(grid, graph);
    assert_degree_at_most_three(graph);
    assert_eq!(graph.verify(), Ok(()));
}
