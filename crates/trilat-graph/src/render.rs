//! Plain-text adjacency matrix rendering.

use crate::graph::Graph;

impl Graph {
    /// One line per vertex in id order, bits separated by single spaces.
    ///
    /// Every row is padded with zeros to
    /// [`max_adjacency_width`](Graph::max_adjacency_width), so the output is
    /// a rectangle. A graph without edges renders one empty line per vertex.
    pub fn render_matrix(&self) -> String {
        let width = self.max_adjacency_width();
        let mut out = String::with_capacity(self.vertex_count() * (2 * width + 1));
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (j, bit) in v.adjacency_row(width).into_iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                out.push(char::from(b'0' + bit));
            }
        }
        out
    }
}
