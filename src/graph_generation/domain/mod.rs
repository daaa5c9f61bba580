pub mod build_environment;
pub mod build_order;
pub mod dependency_edge;
pub mod dependency_graph;
pub mod node_ref;
pub mod run_metadata;

pub use build_environment::{BuildEnvironment, EnvValue};
pub use build_order::BuildOrder;
pub use dependency_edge::{DependencyEdge, DependencyKind};
pub use dependency_graph::{DependencyGraph, NodeDependencies};
pub use node_ref::{NodeName, ResolvedRef, Scope, DEFAULT_VERSION};
pub use run_metadata::RunMetadata;
