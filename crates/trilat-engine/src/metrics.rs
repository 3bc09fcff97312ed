//! Counters collected while growing a lattice.
//!
//! [`BuildMetrics`] is filled in as the builder steps and is returned with
//! the finished [`Lattice`](crate::Lattice).

use trilat_space::Expansion;

/// Counts and timing for a single build.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildMetrics {
    /// Wall-clock time from seeding to completion, in microseconds.
    pub total_us: u64,
    /// Vertices expanded.
    pub expansions: u64,
    /// Vertices popped at or beyond the depth bound and left unexpanded.
    pub discarded: u64,
    /// Vertices allocated by expansions (the root is not counted).
    pub created: u64,
    /// Neighbour cells found already occupied.
    pub reused: u64,
    /// Distance labels lowered by relaxation.
    pub relaxations: u64,
    /// Rows added to the grid bounds.
    pub rows_grown: u64,
    /// Columns added to the grid bounds.
    pub cols_grown: u64,
}

impl BuildMetrics {
    /// Fold one expansion into the counters.
    pub fn record(&mut self, expansion: &Expansion) {
        self.expansions += 1;
        self.created += expansion.created.len() as u64;
        self.reused += expansion.reused.len() as u64;
        self.relaxations += u64::from(expansion.relaxations);
        self.rows_grown += u64::from(expansion.growth.rows());
        self.cols_grown += u64::from(expansion.growth.cols());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use trilat_core::VertexId;
    use trilat_space::{Growth, Orientation};

    #[test]
    fn default_metrics_are_zero() {
        let m = BuildMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.expansions, 0);
        assert_eq!(m.discarded, 0);
        assert_eq!(m.created, 0);
        assert_eq!(m.reused, 0);
        assert_eq!(m.relaxations, 0);
        assert_eq!(m.rows_grown, 0);
        assert_eq!(m.cols_grown, 0);
    }

    #[test]
    fn record_accumulates() {
        let exp = Expansion {
            centre: VertexId(1),
            orientation: Orientation::ApexDown,
            created: smallvec![VertexId(4), VertexId(5)],
            reused: smallvec![VertexId(0)],
            relaxations: 2,
            growth: Growth {
                rows_above: 1,
                ..Growth::default()
            },
        };
        let mut m = BuildMetrics::default();
        m.record(&exp);
        m.record(&exp);
        assert_eq!(m.expansions, 2);
        assert_eq!(m.created, 4);
        assert_eq!(m.reused, 2);
        assert_eq!(m.relaxations, 4);
        assert_eq!(m.rows_grown, 2);
        assert_eq!(m.cols_grown, 0);
    }
}
