//! Strongly-typed vertex identifiers.

use std::fmt;

/// Identifies a vertex within a generated lattice.
///
/// Vertices are numbered densely in creation order, so `VertexId(n)` is the
/// n-th vertex allocated by the graph arena. The root is always
/// [`VertexId::ROOT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// The seed vertex every lattice grows from.
    pub const ROOT: VertexId = VertexId(0);

    /// Position of this vertex in id-ordered storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for the root vertex.
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
