//! Min-priority queue used by the recompute oracle.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    // Reversed so the max-heap pops the smallest priority, oldest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Generic min-priority queue.
///
/// Items never need to be comparable: ordering is by priority, and ties pop
/// in insertion order, which keeps oracle runs deterministic.
///
/// # Examples
///
/// ```
/// use trilat_graph::PriorityFrontier;
///
/// let mut q = PriorityFrontier::new();
/// q.push(3, "c");
/// q.push(1, "a");
/// q.push(1, "b");
/// assert_eq!(q.pop(), Some("a"));
/// assert_eq!(q.pop(), Some("b"));
/// assert_eq!(q.pop(), Some("c"));
/// assert_eq!(q.pop(), None);
/// ```
pub struct PriorityFrontier<P, T> {
    heap: BinaryHeap<Entry<P, T>>,
    next_seq: u64,
}

impl<P: Ord, T> PriorityFrontier<P, T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `item` keyed by `priority`.
    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove and return the lowest-priority item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Remove the lowest-priority entry, returning its priority as well.
    pub fn pop_with_priority(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Priority of the entry [`pop`](Self::pop) would return next.
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|e| &e.priority)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<P: Ord, T> Default for PriorityFrontier<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
