use crate::graph_generation::domain::{NodeName, ResolvedRef, RunMetadata};
use std::path::PathBuf;

/// One node in build order with the directory its manifest lives in
#[derive(Debug, Clone)]
pub struct NodeOutcome {
    pub name: NodeName,
    pub reference: ResolvedRef,
    /// Created directory, or the planned one in dry-run mode
    pub directory: PathBuf,
}

/// GraphBuildResponse - Internal response DTO from the graph build use case
#[derive(Debug, Clone)]
pub struct GraphBuildResponse {
    /// Nodes in the order they were built
    pub nodes: Vec<NodeOutcome>,
    pub workdir: PathBuf,
    pub cache_dir: PathBuf,
    pub cache_env_var: String,
    pub edge_count: usize,
    pub dry_run: bool,
    pub metadata: RunMetadata,
}

impl GraphBuildResponse {
    pub fn build_order(&self) -> impl Iterator<Item = &NodeName> {
        self.nodes.iter().map(|outcome| &outcome.name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
