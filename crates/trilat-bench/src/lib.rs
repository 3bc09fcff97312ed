//! Benchmark profiles for the trilat lattice generator.
//!
//! Provides pre-built [`GenerateConfig`] profiles:
//!
//! - [`reference_profile`]: depth 32 (1 585 vertices)
//! - [`stress_profile`]: depth 100 (15 151 vertices)
//! - [`verified_profile`]: depth 16 with oracle verification (409 vertices)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trilat_engine::GenerateConfig;

/// Depth of [`reference_profile`].
pub const REFERENCE_DEPTH: i64 = 32;

/// Depth of [`stress_profile`].
pub const STRESS_DEPTH: i64 = 100;

/// Depth of [`verified_profile`]. The oracle runs one Dijkstra per vertex,
/// so this stays small.
pub const VERIFIED_DEPTH: i64 = 16;

/// Reference benchmark profile: depth 32, no limit, no verification.
pub fn reference_profile() -> GenerateConfig {
    GenerateConfig::with_depth(REFERENCE_DEPTH)
}

/// Stress benchmark profile: depth 100, capped at the exact lattice size so
/// a regression that over-allocates fails loudly instead of swapping.
pub fn stress_profile() -> GenerateConfig {
    GenerateConfig {
        depth: STRESS_DEPTH,
        vertex_limit: Some(lattice_size(STRESS_DEPTH)),
        verify: false,
    }
}

/// Verification benchmark profile: depth 16 with every label checked.
pub fn verified_profile() -> GenerateConfig {
    GenerateConfig {
        depth: VERIFIED_DEPTH,
        vertex_limit: None,
        verify: true,
    }
}

/// Vertices in a lattice of `depth`: `1 + 3·depth·(depth+1)/2`.
pub fn lattice_size(depth: i64) -> usize {
    let n = depth.max(0) as usize;
    1 + 3 * n * (n + 1) / 2
}
