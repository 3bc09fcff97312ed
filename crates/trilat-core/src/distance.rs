//! Hop-count distance labels with an infinity sentinel.

use std::fmt;

/// Best known hop count from the root, or infinity when no path is known yet.
///
/// The sentinel is `u32::MAX`, which keeps the derived ordering correct:
/// every finite distance compares less than [`Distance::INFINITE`].
///
/// # Examples
///
/// ```
/// use trilat_core::Distance;
///
/// let d = Distance::finite(2);
/// assert_eq!(d.successor(), Distance::finite(3));
/// assert!(d < Distance::INFINITE);
/// assert_eq!(Distance::INFINITE.successor(), Distance::INFINITE);
/// assert_eq!(Distance::INFINITE.get(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Distance of the root from itself.
    pub const ZERO: Distance = Distance(0);

    /// No path known.
    pub const INFINITE: Distance = Distance(u32::MAX);

    /// Largest representable finite distance.
    pub const MAX_FINITE: u32 = u32::MAX - 1;

    /// A finite distance of `hops` edges.
    ///
    /// # Panics
    ///
    /// Panics if `hops` collides with the infinity sentinel.
    pub fn finite(hops: u32) -> Self {
        assert!(
            hops <= Self::MAX_FINITE,
            "distance {hops} collides with the infinity sentinel"
        );
        Self(hops)
    }

    /// Hop count, or `None` if infinite.
    pub fn get(self) -> Option<u32> {
        if self.is_finite() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns `true` unless this is the infinity sentinel.
    pub fn is_finite(self) -> bool {
        self != Self::INFINITE
    }

    /// Distance one edge further away. Infinity stays infinite.
    pub fn successor(self) -> Self {
        if self.is_finite() {
            debug_assert!(self.0 < Self::MAX_FINITE, "distance overflow");
            Self(self.0 + 1)
        } else {
            self
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(hops) => write!(f, "{hops}"),
            None => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_sorts_last() {
        assert!(Distance::ZERO < Distance::finite(1));
        assert!(Distance::finite(Distance::MAX_FINITE) < Distance::INFINITE);
        assert_eq!(
            Distance::finite(3).min(Distance::INFINITE),
            Distance::finite(3)
        );
    }

    #[test]
    fn default_is_infinite() {
        assert_eq!(Distance::default(), Distance::INFINITE);
        assert!(!Distance::default().is_finite());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Distance::finite(5).to_string(), "5");
        assert_eq!(Distance::INFINITE.to_string(), "inf");
    }

    #[test]
    #[should_panic(expected = "infinity sentinel")]
    fn finite_rejects_sentinel() {
        let _ = Distance::finite(u32::MAX);
    }
}
