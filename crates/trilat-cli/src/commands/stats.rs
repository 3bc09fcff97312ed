use anyhow::{Context, Result};
use trilat::engine::{generate_with, Lattice};
use trilat::graph::GraphSummary;

use crate::cli::GrowArgs;

pub fn run(args: &GrowArgs) -> Result<()> {
    let lattice = build(args, false)?;
    println!("{}", GraphSummary::of(&lattice.graph));
    Ok(())
}

/// Grow the lattice described by `args`, logging the build metrics.
pub(crate) fn build(args: &GrowArgs, verify: bool) -> Result<Lattice> {
    let lattice = generate_with(args.config(verify))
        .with_context(|| format!("failed to grow lattice of depth {}", args.depth))?;
    let m = &lattice.metrics;
    tracing::info!(
        depth = args.depth,
        vertices = lattice.graph.vertex_count(),
        expansions = m.expansions,
        relaxations = m.relaxations,
        grid_rows = lattice.grid.bounds().rows(),
        grid_cols = lattice.grid.bounds().cols(),
        total_us = m.total_us,
        "lattice grown"
    );
    Ok(lattice)
}
