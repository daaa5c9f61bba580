//! Build report read model
//!
//! Everything a formatter needs about one run, with paths already rendered
//! as strings.

use serde::Serialize;

/// Main read model for a graph build run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub metadata: RunMetadataView,
    pub dry_run: bool,
    pub workdir: String,
    pub cache_dir: String,
    pub cache_env_var: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes in build order
    pub build_order: Vec<NodeView>,
}

/// View representation of run metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
}

/// View representation of one built node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub name: String,
    pub reference: String,
    pub directory: String,
}
