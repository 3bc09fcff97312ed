use anyhow::Result;

use crate::cli::GrowArgs;
use crate::commands::stats::build;

pub fn run(args: &GrowArgs) -> Result<()> {
    let lattice = build(args, true)?;
    println!(
        "ok: {} vertices, every label matches its shortest path to the root",
        lattice.graph.vertex_count()
    );
    Ok(())
}
