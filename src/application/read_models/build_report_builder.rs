//! Builder for constructing BuildReport from the use case response

use super::build_report::{BuildReport, NodeView, RunMetadataView};
use crate::application::dto::{GraphBuildResponse, NodeOutcome};
use crate::graph_generation::domain::RunMetadata;

/// Transforms a [`GraphBuildResponse`] into the query-optimized report
pub struct BuildReportBuilder;

impl BuildReportBuilder {
    pub fn build(response: &GraphBuildResponse) -> BuildReport {
        BuildReport {
            metadata: Self::build_metadata(&response.metadata),
            dry_run: response.dry_run,
            workdir: response.workdir.display().to_string(),
            cache_dir: response.cache_dir.display().to_string(),
            cache_env_var: response.cache_env_var.clone(),
            node_count: response.node_count(),
            edge_count: response.edge_count,
            build_order: response.nodes.iter().map(Self::build_node).collect(),
        }
    }

    fn build_metadata(metadata: &RunMetadata) -> RunMetadataView {
        RunMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
        }
    }

    fn build_node(outcome: &NodeOutcome) -> NodeView {
        NodeView {
            name: outcome.name.to_string(),
            reference: outcome.reference.to_string(),
            directory: outcome.directory.display().to_string(),
        }
    }
}
