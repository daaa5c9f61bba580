use crate::application::dto::{EnvironmentScope, GraphBuildRequest, GraphBuildResponse, NodeOutcome};
use crate::graph_generation::domain::{BuildEnvironment, BuildOrder, DependencyGraph, NodeName};
use crate::graph_generation::policies::DirectoryNaming;
use crate::graph_generation::services::{
    EdgeListParser, ManifestRenderer, NodeResolver, RunMetadataGenerator, TopologicalProcessor,
};
use crate::ports::outbound::{EdgeListReader, NodeWorkspace, PackageBuilder, ProgressReporter};
use crate::shared::environment::EnvironmentGuard;
use crate::shared::error::ForgeError;
use crate::shared::security::ensure_run_directory;
use crate::shared::Result;
use std::path::Path;
use tracing::{debug, info};

/// Variable receiving the `prepend_path` entries
const PATH_VARIABLE: &str = "PATH";

/// GenerateGraphUseCase - Core use case for building a dependency graph
///
/// Reads and parses the edge list, then walks the graph dependencies-first,
/// giving every node its own directory and manifest and invoking the
/// external builder there. The first failure ends the run; directories
/// created up to that point stay on disk.
///
/// # Type Parameters
/// * `R` - EdgeListReader implementation
/// * `W` - NodeWorkspace implementation
/// * `B` - PackageBuilder implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateGraphUseCase<R, W, B, P> {
    edge_list_reader: R,
    workspace: W,
    builder: B,
    progress_reporter: P,
}

impl<R, W, B, P> GenerateGraphUseCase<R, W, B, P>
where
    R: EdgeListReader,
    W: NodeWorkspace,
    B: PackageBuilder,
    P: ProgressReporter,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(edge_list_reader: R, workspace: W, builder: B, progress_reporter: P) -> Self {
        Self {
            edge_list_reader,
            workspace,
            builder,
            progress_reporter,
        }
    }

    /// Executes the graph build use case
    ///
    /// # Errors
    /// Parse errors and cycles abort before any node is built. Otherwise the
    /// first node that cannot be created, written or built stops the run.
    pub fn execute(&self, request: GraphBuildRequest) -> Result<GraphBuildResponse> {
        // Step 1: Read and parse the edge list
        let graph = self.read_and_parse(&request.input_path)?;
        let resolver = NodeResolver::new(request.scope.clone());

        // Early return for dry-run mode (ordering only)
        if request.dry_run {
            return self.plan(&graph, &resolver, &request);
        }

        // Cycles anywhere in the graph fail before the first build
        Self::planned_order(&graph)?;

        // Step 2: Prepare the run directories and the build environment
        ensure_run_directory(&request.workdir)?;
        ensure_run_directory(&request.cache_dir)?;
        let environment = Self::build_environment(&request);

        // Step 3: Traverse and build
        let (guard, builder_environment) = match request.environment_scope {
            EnvironmentScope::Subprocess => (None, environment),
            EnvironmentScope::Process => (
                Some(EnvironmentGuard::enter(&environment)?),
                BuildEnvironment::new(),
            ),
        };

        let nodes = self.build_graph(&graph, &resolver, &request, &builder_environment);
        drop(guard);
        let nodes = nodes?;

        self.progress_reporter.report_completion(&format!(
            "✅ Built {} node(s) in {}",
            nodes.len(),
            request.workdir.display()
        ));

        Ok(self.build_response(nodes, &graph, request, false))
    }

    fn read_and_parse(&self, input_path: &Path) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading edge list from: {}",
            input_path.display()
        ));

        let content = self.edge_list_reader.read_edge_list(input_path)?;
        let graph = EdgeListParser::parse(&content)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} node(s) and {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Edge list parsed"
        );

        Ok(graph)
    }

    /// Computes the build order without touching the filesystem
    fn plan(
        &self,
        graph: &DependencyGraph,
        resolver: &NodeResolver,
        request: &GraphBuildRequest,
    ) -> Result<GraphBuildResponse> {
        let nodes = Self::planned_order(graph)?
            .into_vec()
            .into_iter()
            .map(|name| {
                let reference = resolver.resolve_node(&name);
                let directory = request
                    .workdir
                    .join(DirectoryNaming::directory_name(&reference));
                NodeOutcome {
                    name,
                    reference,
                    directory,
                }
            })
            .collect();

        self.progress_reporter
            .report_completion("Success: Graph validated. No nodes were built.");

        Ok(self.build_response(nodes, graph, request.clone(), true))
    }

    fn planned_order(graph: &DependencyGraph) -> Result<BuildOrder> {
        let mut order = BuildOrder::new();
        TopologicalProcessor::process_all(graph, &mut order, &mut |_: &NodeName| Ok(()))?;
        Ok(order)
    }

    fn build_environment(request: &GraphBuildRequest) -> BuildEnvironment {
        let environment = BuildEnvironment::new()
            .with_scalar(request.cache_env_var.clone(), request.cache_dir.as_os_str());
        if request.prepend_path.is_empty() {
            return environment;
        }
        environment.with_path_list(PATH_VARIABLE, request.prepend_path.clone())
    }

    fn build_graph(
        &self,
        graph: &DependencyGraph,
        resolver: &NodeResolver,
        request: &GraphBuildRequest,
        environment: &BuildEnvironment,
    ) -> Result<Vec<NodeOutcome>> {
        self.progress_reporter.report("🔨 Building nodes...");

        let total = graph.node_count();
        let mut order = BuildOrder::new();
        let mut nodes = Vec::with_capacity(total);

        let result = TopologicalProcessor::process_all(graph, &mut order, &mut |node: &NodeName| {
            let outcome = self.build_node(node, graph, resolver, request, environment)?;
            nodes.push(outcome);
            self.progress_reporter
                .report_progress(nodes.len(), total, Some(node.as_str()));
            Ok(())
        });

        if let Err(e) = result {
            self.progress_reporter.report_error(&format!(
                "❌ Build stopped after {} of {} node(s)",
                nodes.len(),
                total
            ));
            return Err(e);
        }

        Ok(nodes)
    }

    /// Creates the node directory, writes its manifest and runs the builder
    fn build_node(
        &self,
        node: &NodeName,
        graph: &DependencyGraph,
        resolver: &NodeResolver,
        request: &GraphBuildRequest,
        environment: &BuildEnvironment,
    ) -> Result<NodeOutcome> {
        let reference = resolver.resolve_node(node);
        let dir_name = DirectoryNaming::directory_name(&reference);
        let directory = self
            .workspace
            .create_node_dir(&request.workdir, &dir_name, node.as_str())?;

        let manifest = ManifestRenderer::render(
            &reference,
            &resolver.resolve_all(graph.requires(node)),
            &resolver.resolve_all(graph.build_requires(node)),
        );
        self.workspace
            .write_manifest(&directory, &request.manifest_filename, &manifest)?;
        debug!(node = %node, reference = %reference, "Manifest written");

        let status = self.builder.build(&directory, environment)?;
        if !status.is_success() {
            return Err(ForgeError::ExternalBuildFailed {
                node: node.to_string(),
                status: status.to_string(),
                path: directory,
            }
            .into());
        }
        debug!(node = %node, "Node built");

        Ok(NodeOutcome {
            name: node.clone(),
            reference,
            directory,
        })
    }

    fn build_response(
        &self,
        nodes: Vec<NodeOutcome>,
        graph: &DependencyGraph,
        request: GraphBuildRequest,
        dry_run: bool,
    ) -> GraphBuildResponse {
        GraphBuildResponse {
            nodes,
            workdir: request.workdir,
            cache_dir: request.cache_dir,
            cache_env_var: request.cache_env_var,
            edge_count: graph.edge_count(),
            dry_run,
            metadata: RunMetadataGenerator::generate_default_metadata(),
        }
    }
}
