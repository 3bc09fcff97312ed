//! Errors returned while growing a lattice.

use std::error::Error;
use std::fmt;

use trilat_core::ConsistencyError;
use trilat_space::SpaceError;

use crate::config::ConfigError;

/// Errors from [`generate`](crate::generate) and
/// [`LatticeBuilder`](crate::LatticeBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The configuration was rejected before construction.
    Config(ConfigError),
    /// The placement grid rejected an expansion.
    Space(SpaceError),
    /// Distance labels or adjacency failed verification.
    Consistency(ConsistencyError),
    /// Growth would exceed the configured vertex limit.
    VertexLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Consistency(e) => write!(f, "consistency: {e}"),
            Self::VertexLimitExceeded { limit } => {
                write!(f, "lattice exceeds the vertex limit of {limit}")
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Consistency(e) => Some(e),
            Self::VertexLimitExceeded { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for GenerateError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ConsistencyError> for GenerateError {
    fn from(e: ConsistencyError) -> Self {
        Self::Consistency(e)
    }
}
