//! Generation configuration, validation, and error types.
//!
//! [`GenerateConfig`] is the builder input for growing a lattice.
//! [`validate()`](GenerateConfig::validate) checks it before any vertex is
//! created, so an invalid request never allocates.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GenerateConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested depth is negative.
    NegativeDepth {
        /// The rejected depth.
        value: i64,
    },
    /// The requested depth does not fit the `u32` hop counter.
    DepthTooLarge {
        /// The rejected depth.
        value: i64,
    },
    /// A vertex limit of zero would reject even the root.
    VertexLimitZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDepth { value } => {
                write!(f, "depth must be non-negative, got {value}")
            }
            Self::DepthTooLarge { value } => {
                write!(f, "depth {value} exceeds u32::MAX")
            }
            Self::VertexLimitZero => write!(f, "vertex_limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── GenerateConfig ─────────────────────────────────────────────────

/// Complete configuration for growing one lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Hop radius N. Every vertex closer than N is expanded. Default: 0.
    pub depth: i64,
    /// Abort once the graph would hold more than this many vertices.
    /// `None` = unbounded. Default: `None`.
    pub vertex_limit: Option<usize>,
    /// Re-check every distance label against the oracle after growth.
    /// Default: `false`.
    pub verify: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            depth: 0,
            vertex_limit: None,
            verify: false,
        }
    }
}

impl GenerateConfig {
    /// Configuration for depth `depth` with every other field defaulted.
    pub fn with_depth(depth: i64) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Depth is a hop count.
        if self.depth < 0 {
            return Err(ConfigError::NegativeDepth { value: self.depth });
        }
        // 2. Depth must fit the distance label.
        if u32::try_from(self.depth).is_err() {
            return Err(ConfigError::DepthTooLarge { value: self.depth });
        }
        // 3. The root alone needs a limit of at least 1.
        if self.vertex_limit == Some(0) {
            return Err(ConfigError::VertexLimitZero);
        }
        Ok(())
    }

    /// Validate and return the depth as a hop count.
    pub(crate) fn hop_depth(&self) -> Result<u32, ConfigError> {
        self.validate()?;
        u32::try_from(self.depth).map_err(|_| ConfigError::DepthTooLarge { value: self.depth })
    }
}
