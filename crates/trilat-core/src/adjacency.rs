//! Growable bit-indexed adjacency set.

use crate::id::VertexId;
use smallvec::SmallVec;

const WORD_BITS: usize = u64::BITS as usize;

/// Set of neighbour ids stored as a bit vector: bit `i` set ⇔ edge to vertex `i`.
///
/// Storage grows on demand to cover the highest inserted id. The first 128
/// ids are stored inline, which covers every neighbour of the early rings
/// without touching the heap.
///
/// # Examples
///
/// ```
/// use trilat_core::{AdjacencySet, VertexId};
///
/// let mut set = AdjacencySet::new();
/// assert!(set.insert(VertexId(3)));
/// assert!(!set.insert(VertexId(3)));
/// assert!(set.contains(VertexId(3)));
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.width(), 4);
/// assert_eq!(set.row(6), vec![0, 0, 0, 1, 0, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencySet {
    words: SmallVec<[u64; 2]>,
}

impl AdjacencySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    fn locate(id: VertexId) -> (usize, u64) {
        let i = id.index();
        (i / WORD_BITS, 1u64 << (i % WORD_BITS))
    }

    /// Add `id`. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: VertexId) -> bool {
        let (word, mask) = Self::locate(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let was_set = self.words[word] & mask != 0;
        self.words[word] |= mask;
        !was_set
    }

    /// Membership test. Ids past the stored words are absent.
    pub fn contains(&self, id: VertexId) -> bool {
        let (word, mask) = Self::locate(id);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Number of neighbours.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no neighbour is recorded.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Length of the row needed to show every set bit: highest id + 1, or 0.
    pub fn width(&self) -> usize {
        for (i, &w) in self.words.iter().enumerate().rev() {
            if w != 0 {
                return i * WORD_BITS + (WORD_BITS - w.leading_zeros() as usize);
            }
        }
        0
    }

    /// Neighbour ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(VertexId((i * WORD_BITS + bit) as u32))
            })
        })
    }

    /// Membership as a 0/1 row, padded with zeros to `width`.
    ///
    /// The row is never truncated: if `width` is smaller than
    /// [`width()`](Self::width) the natural width is used.
    pub fn row(&self, width: usize) -> Vec<u8> {
        let len = width.max(self.width());
        (0..len)
            .map(|i| u8::from(self.contains(VertexId(i as u32))))
            .collect()
    }
}
