//! The auto-expanding placement grid.

use crate::bounds::{GridBounds, Growth};
use crate::cell::Cell;
use crate::error::SpaceError;
use crate::orientation::Orientation;
use indexmap::IndexMap;
use smallvec::SmallVec;
use trilat_core::{Distance, VertexId};
use trilat_graph::Graph;

/// Outcome of expanding one vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    /// The expanded vertex.
    pub centre: VertexId,
    /// Orientation the centre was classified with.
    pub orientation: Orientation,
    /// Vertices allocated by this expansion, in wiring order.
    pub created: SmallVec<[VertexId; 3]>,
    /// Previously placed vertices found in the neighbour cells.
    pub reused: SmallVec<[VertexId; 3]>,
    /// Distance labels lowered while relaxing the three edges.
    pub relaxations: u32,
    /// Rows and columns inserted to give the centre its margin.
    pub growth: Growth,
}

/// Sparse placement grid mapping cells to the vertices that occupy them.
///
/// Vertices are placed strictly in id order, so the insertion order of the
/// cell map doubles as the id → cell index: vertex `n` is entry `n`.
/// Together with [`GridBounds`] this replaces a dense matrix of optional
/// vertex slots; "inserting" a boundary row or column never moves a
/// placed vertex.
///
/// # Examples
///
/// ```
/// use trilat_core::VertexId;
/// use trilat_graph::Graph;
/// use trilat_space::{Cell, LatticeGrid, Orientation};
///
/// let mut graph = Graph::new();
/// let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
///
/// let exp = grid.expand(&mut graph, root).unwrap();
/// assert_eq!(exp.orientation, Orientation::ApexUp);
/// assert_eq!(exp.created.as_slice(), &[VertexId(1), VertexId(2), VertexId(3)]);
/// assert_eq!(grid.vertex_at(Cell::new(-1, 0)), Some(VertexId(1)));
/// assert_eq!(graph.max_degree(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LatticeGrid {
    cells: IndexMap<Cell, VertexId>,
    bounds: GridBounds,
}

impl LatticeGrid {
    /// Seed an empty graph with the root, placed at [`Cell::ORIGIN`] with
    /// distance 0.
    pub fn seeded(graph: &mut Graph) -> Result<(Self, VertexId), SpaceError> {
        if !graph.is_empty() {
            return Err(SpaceError::GraphNotEmpty {
                vertex_count: graph.vertex_count(),
            });
        }
        let mut grid = Self {
            cells: IndexMap::new(),
            bounds: GridBounds::around(Cell::ORIGIN),
        };
        let root = graph.allocate(Distance::ZERO);
        grid.place(root, Cell::ORIGIN);
        Ok((grid, root))
    }

    /// Number of placed vertices.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing is placed. A seeded grid is never empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current rectangular extent.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// The vertex occupying `cell`, if any.
    pub fn vertex_at(&self, cell: Cell) -> Option<VertexId> {
        self.cells.get(&cell).copied()
    }

    /// Returns `true` if `cell` is occupied.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// The cell `vertex` occupies.
    pub fn cell_of(&self, vertex: VertexId) -> Option<Cell> {
        self.cells.get_index(vertex.index()).map(|(&cell, _)| cell)
    }

    /// Orientation `vertex` would be expanded with, given current occupancy.
    pub fn orientation_of(&self, vertex: VertexId) -> Option<Orientation> {
        let cell = self.cell_of(vertex)?;
        Some(Orientation::classify(cell, |c| self.is_occupied(c)))
    }

    /// Occupied cells in vertex-id order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, VertexId)> + '_ {
        self.cells.iter().map(|(&cell, &id)| (cell, id))
    }

    fn place(&mut self, vertex: VertexId, cell: Cell) {
        debug_assert!(
            self.bounds.contains(cell),
            "cell {cell} outside grid bounds {:?}",
            self.bounds
        );
        debug_assert_eq!(
            vertex.index(),
            self.cells.len(),
            "vertices must be placed in id order"
        );
        let previous = self.cells.insert(cell, vertex);
        debug_assert!(previous.is_none(), "cell {cell} placed twice");
    }

    /// Find or create the three lattice neighbours of `centre`.
    ///
    /// 1. Widen the grid until the centre has one free cell of margin.
    /// 2. Classify the centre's [`Orientation`].
    /// 3. For each neighbour cell in wiring order, allocate and place a new
    ///    vertex if the cell is empty, then connect it to the centre.
    ///    Connecting an already adjacent vertex is a no-op.
    /// 4. Relax distances across all three edges, in both directions.
    ///
    /// Returns the newly created vertices (possibly none) with bookkeeping.
    /// Expanding the same vertex twice creates nothing the second time.
    pub fn expand(
        &mut self,
        graph: &mut Graph,
        centre: VertexId,
    ) -> Result<Expansion, SpaceError> {
        if graph.vertex_count() != self.len() {
            return Err(SpaceError::GraphMismatch {
                placed: self.len(),
                allocated: graph.vertex_count(),
            });
        }
        let cell = self
            .cell_of(centre)
            .ok_or(SpaceError::UnplacedVertex { vertex: centre })?;

        let growth = self.bounds.grow_to_margin(cell);
        if !growth.is_empty() {
            tracing::trace!(
                rows = growth.rows(),
                cols = growth.cols(),
                grid_rows = self.bounds.rows(),
                grid_cols = self.bounds.cols(),
                "grid grown"
            );
        }

        let orientation = Orientation::classify(cell, |c| self.is_occupied(c));

        let mut created: SmallVec<[VertexId; 3]> = SmallVec::new();
        let mut reused: SmallVec<[VertexId; 3]> = SmallVec::new();
        let mut neighbours: SmallVec<[VertexId; 3]> = SmallVec::new();
        for target in orientation.neighbour_cells(cell) {
            let neighbour = match self.vertex_at(target) {
                Some(existing) => {
                    reused.push(existing);
                    existing
                }
                None => {
                    let fresh = graph.allocate(Distance::INFINITE);
                    self.place(fresh, target);
                    created.push(fresh);
                    fresh
                }
            };
            graph.connect(centre, neighbour);
            neighbours.push(neighbour);
        }

        let relaxations: u32 = neighbours
            .iter()
            .map(|&n| graph.relax_edge(centre, n))
            .sum();

        tracing::trace!(
            centre = centre.0,
            %cell,
            ?orientation,
            created = created.len(),
            reused = reused.len(),
            relaxations,
            "expanded"
        );

        Ok(Expansion {
            centre,
            orientation,
            created,
            reused,
            relaxations,
            growth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use std::collections::VecDeque;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    /// Breadth-first expansion of every vertex closer than `depth`.
    fn grow(depth: u32) -> (Graph, LatticeGrid) {
        let mut graph = Graph::new();
        let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        let mut queue = VecDeque::from([root]);
        while let Some(v) = queue.pop_front() {
            if graph.distance(v).unwrap() >= Distance::finite(depth) {
                continue;
            }
            let exp = grid.expand(&mut graph, v).unwrap();
            queue.extend(exp.created);
        }
        (graph, grid)
    }

    // ── Seeding ─────────────────────────────────────────────────

    #[test]
    fn seed_places_root_at_origin() {
        let mut graph = Graph::new();
        let (grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        assert_eq!(root, VertexId::ROOT);
        assert_eq!(grid.cell_of(root), Some(Cell::ORIGIN));
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_empty());
        assert_eq!(grid.bounds().cell_count(), 1);
        assert_eq!(graph.distance(root), Some(Distance::ZERO));
    }

    #[test]
    fn seed_rejects_populated_graph() {
        let mut graph = Graph::new();
        graph.allocate(Distance::ZERO);
        assert!(matches!(
            LatticeGrid::seeded(&mut graph),
            Err(SpaceError::GraphNotEmpty { vertex_count: 1 })
        ));
    }

    // ── Expansion ───────────────────────────────────────────────

    #[test]
    fn root_expands_apex_up() {
        let mut graph = Graph::new();
        let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        let exp = grid.expand(&mut graph, root).unwrap();
        assert_eq!(exp.orientation, Orientation::ApexUp);
        assert!(exp.reused.is_empty());
        assert_eq!(exp.relaxations, 3);
        assert_eq!(
            exp.growth,
            Growth {
                rows_above: 1,
                rows_below: 1,
                cols_left: 1,
                cols_right: 1
            }
        );
        assert_eq!(grid.cell_of(VertexId(1)), Some(c(-1, 0)));
        assert_eq!(grid.cell_of(VertexId(2)), Some(c(1, 1)));
        assert_eq!(grid.cell_of(VertexId(3)), Some(c(1, -1)));
        for id in 1..=3 {
            assert_eq!(graph.distance(VertexId(id)), Some(Distance::finite(1)));
            assert!(graph.are_connected(root, VertexId(id)));
        }
    }

    #[test]
    fn child_of_root_is_apex_down_and_reuses_root() {
        let mut graph = Graph::new();
        let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        grid.expand(&mut graph, root).unwrap();
        let exp = grid.expand(&mut graph, VertexId(1)).unwrap();
        assert_eq!(exp.orientation, Orientation::ApexDown);
        assert_eq!(exp.reused.as_slice(), &[root]);
        assert_eq!(exp.created.as_slice(), &[VertexId(4), VertexId(5)]);
        assert_eq!(grid.cell_of(VertexId(4)), Some(c(-2, -1)));
        assert_eq!(grid.cell_of(VertexId(5)), Some(c(-2, 1)));
        assert_eq!(exp.relaxations, 2);
        assert_eq!(exp.growth.rows_above, 1);
        assert_eq!(graph.distance(VertexId(5)), Some(Distance::finite(2)));
    }

    #[test]
    fn re_expansion_creates_nothing() {
        let mut graph = Graph::new();
        let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        grid.expand(&mut graph, root).unwrap();
        let before = graph.clone();
        let again = grid.expand(&mut graph, root).unwrap();
        assert!(again.created.is_empty());
        assert_eq!(again.reused.len(), 3);
        assert_eq!(again.relaxations, 0);
        assert!(again.growth.is_empty());
        assert_eq!(graph.vertices(), before.vertices());
    }

    #[test]
    fn shared_cell_is_reused_from_both_sides() {
        // 5 at (-2, 1) and 7 at (0, 2) both reach (-1, 2): opposite corner of
        // the hexagon 0-1-5-?-7-2.
        let (graph, grid) = grow(3);
        let shared = grid.vertex_at(c(-1, 2)).unwrap();
        assert_eq!(shared, VertexId(13));
        assert!(graph.are_connected(shared, VertexId(5)));
        assert!(graph.are_connected(shared, VertexId(7)));
        assert_eq!(graph.vertex(shared).unwrap().degree(), 2);
        assert_eq!(graph.distance(shared), Some(Distance::finite(3)));
    }

    #[test]
    fn ring_sizes_follow_honeycomb() {
        for (depth, expected) in [(0, 1), (1, 4), (2, 10), (3, 19), (4, 31)] {
            let (graph, grid) = grow(depth);
            assert_eq!(graph.vertex_count(), expected, "depth {depth}");
            assert_eq!(grid.len(), expected, "depth {depth}");
        }
    }

    #[test]
    fn bounds_after_three_rings() {
        let (_, grid) = grow(3);
        assert_eq!(grid.bounds().min(), c(-3, -3));
        assert_eq!(grid.bounds().max(), c(3, 3));
    }

    #[test]
    fn orientation_of_placed_vertices() {
        let (_, grid) = grow(2);
        assert_eq!(grid.orientation_of(VertexId::ROOT), Some(Orientation::ApexUp));
        assert_eq!(grid.orientation_of(VertexId(1)), Some(Orientation::ApexDown));
        assert_eq!(grid.orientation_of(VertexId(4)), Some(Orientation::ApexUp));
        assert_eq!(grid.orientation_of(VertexId(99)), None);
    }

    // ── Errors ──────────────────────────────────────────────────

    #[test]
    fn expanding_unplaced_vertex_fails() {
        let mut graph = Graph::new();
        let (mut grid, _) = LatticeGrid::seeded(&mut graph).unwrap();
        assert_eq!(
            grid.expand(&mut graph, VertexId(7)),
            Err(SpaceError::UnplacedVertex {
                vertex: VertexId(7)
            })
        );
    }

    #[test]
    fn expanding_against_foreign_graph_fails() {
        let mut graph = Graph::new();
        let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
        let mut other = Graph::new();
        assert_eq!(
            grid.expand(&mut other, root),
            Err(SpaceError::GraphMismatch {
                placed: 1,
                allocated: 0
            })
        );
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_depth_0() {
        let (graph, grid) = grow(0);
        compliance::run_full_compliance(&grid, &graph);
    }

    #[test]
    fn compliance_depth_3() {
        let (graph, grid) = grow(3);
        compliance::run_full_compliance(&grid, &graph);
    }

    #[test]
    fn compliance_depth_8() {
        let (graph, grid) = grow(8);
        compliance::run_full_compliance(&grid, &graph);
    }
}
