/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod environment_scope;
mod graph_build_request;
mod graph_build_response;
mod output_format;

pub use environment_scope::EnvironmentScope;
pub use graph_build_request::{GraphBuildRequest, DEFAULT_CACHE_ENV_VAR};
pub use graph_build_response::{GraphBuildResponse, NodeOutcome};
pub use output_format::OutputFormat;
