use crate::application::dto::{EnvironmentScope, OutputFormat};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Build a synthetic package dependency graph in dependency order
#[derive(Parser, Debug)]
#[command(name = "depgraph-forge")]
#[command(version)]
#[command(
    about = "Build a synthetic package dependency graph in dependency order",
    long_about = "Reads an edge list ('a -> b' requires, 'a ~> b' build-requires), renders a \
                  manifest for every node and runs the external package builder on each node \
                  after its dependencies, against an isolated cache root."
)]
pub struct Args {
    /// Edge-list file describing the graph
    #[arg(default_value = "nodes.conan")]
    pub input: PathBuf,

    /// Config file (defaults to depgraph-forge.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory receiving one subdirectory per node (defaults to a new temp directory)
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Isolated cache root for the builder (defaults to a new temp directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// External builder program
    #[arg(long, value_name = "PROGRAM")]
    pub builder: Option<String>,

    /// Argument passed to the builder; {user} and {channel} are substituted.
    /// Can be specified multiple times
    #[arg(long = "builder-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub builder_args: Vec<String>,

    /// Environment variable carrying the cache root
    #[arg(long, value_name = "NAME")]
    pub cache_env_var: Option<String>,

    /// Default user for partially qualified node names
    #[arg(long)]
    pub user: Option<String>,

    /// Default channel for partially qualified node names
    #[arg(long)]
    pub channel: Option<String>,

    /// Where the cache variable is applied: subprocess or process
    #[arg(long, value_name = "SCOPE")]
    pub environment_scope: Option<EnvironmentScope>,

    /// Directory prepended to PATH for the builder. Can be specified multiple times
    #[arg(long = "prepend-path", value_name = "DIR")]
    pub prepend_path: Vec<PathBuf>,

    /// Output format: shell or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Parse and order the graph without creating directories or running the builder
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors and the final report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
