use clap::{Args, Parser, Subcommand};
use trilat::engine::GenerateConfig;

#[derive(Parser)]
#[command(name = "trilat")]
#[command(author, version, about = "Grow triangle-reflection lattices and inspect their distance labels")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print vertex, edge, degree and distance statistics
    Stats {
        #[command(flatten)]
        grow: GrowArgs,
    },

    /// Print the adjacency matrix, one row per vertex
    Matrix {
        #[command(flatten)]
        grow: GrowArgs,

        /// Print the statistics block before the matrix
        #[arg(long, short)]
        summary: bool,
    },

    /// Check every distance label against a from-scratch shortest-path search
    Verify {
        #[command(flatten)]
        grow: GrowArgs,
    },
}

/// Options shared by every subcommand.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct GrowArgs {
    /// Hop radius N; every vertex closer than N is expanded
    #[arg(short = 'n', long = "depth", allow_negative_numbers = true)]
    pub depth: i64,

    /// Abort if the lattice would hold more vertices than this
    #[arg(long)]
    pub vertex_limit: Option<usize>,
}

impl GrowArgs {
    pub fn config(&self, verify: bool) -> GenerateConfig {
        GenerateConfig {
            depth: self.depth,
            vertex_limit: self.vertex_limit,
            verify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("trilat").chain(args.iter().copied()))
    }

    #[test]
    fn stats_takes_short_depth() {
        let cli = parse(&["stats", "-n", "4"]).unwrap();
        let Commands::Stats { grow } = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(grow.depth, 4);
        assert_eq!(grow.vertex_limit, None);
    }

    #[test]
    fn matrix_flags() {
        let cli = parse(&["matrix", "--depth", "2", "--summary", "--vertex-limit", "50"]).unwrap();
        let Commands::Matrix { grow, summary } = cli.command else {
            panic!("expected matrix");
        };
        assert!(summary);
        assert_eq!(grow.config(false).vertex_limit, Some(50));
    }

    #[test]
    fn negative_depth_reaches_validation() {
        let cli = parse(&["verify", "-n", "-3"]).unwrap();
        let Commands::Verify { grow } = cli.command else {
            panic!("expected verify");
        };
        assert!(grow.config(true).validate().is_err());
    }

    #[test]
    fn depth_is_required() {
        assert!(parse(&["stats"]).is_err());
    }
}
