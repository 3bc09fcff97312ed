use anyhow::Result;
use trilat::graph::{Graph, GraphSummary};

use crate::cli::GrowArgs;
use crate::commands::stats::build;

pub fn run(args: &GrowArgs, summary: bool) -> Result<()> {
    let lattice = build(args, false)?;
    let text = render(&lattice.graph, summary);
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

fn render(graph: &Graph, summary: bool) -> String {
    let matrix = graph.render_matrix();
    if summary {
        format!("{}\n\n{matrix}", GraphSummary::of(graph))
    } else {
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trilat::engine::generate;

    #[test]
    fn plain_matrix() {
        let g = generate(1).unwrap();
        assert_eq!(render(&g, false), "0 1 1 1\n1 0 0 0\n1 0 0 0\n1 0 0 0");
    }

    #[test]
    fn root_alone_renders_nothing() {
        let g = generate(0).unwrap();
        assert_eq!(render(&g, false), "");
    }

    #[test]
    fn summary_precedes_matrix() {
        let g = generate(1).unwrap();
        let text = render(&g, true);
        assert!(text.starts_with("vertices:       4\n"));
        assert!(text.ends_with("\n\n0 1 1 1\n1 0 0 0\n1 0 0 0\n1 0 0 0"));
    }
}
