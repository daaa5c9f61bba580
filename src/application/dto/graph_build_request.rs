use super::EnvironmentScope;
use crate::graph_generation::domain::Scope;
use crate::graph_generation::services::DEFAULT_MANIFEST_FILENAME;
use std::path::PathBuf;

/// Variable pointing the external builder at its cache root
pub const DEFAULT_CACHE_ENV_VAR: &str = "CONAN_USER_HOME";

/// GraphBuildRequest - Internal request DTO for the graph build use case
#[derive(Debug, Clone)]
pub struct GraphBuildRequest {
    /// Edge-list file describing the graph
    pub input_path: PathBuf,
    /// Directory receiving one subdirectory per node
    pub workdir: PathBuf,
    /// Isolated cache root handed to the builder
    pub cache_dir: PathBuf,
    /// Name of the variable carrying `cache_dir`
    pub cache_env_var: String,
    /// Default user/channel for partially qualified names
    pub scope: Scope,
    /// File name of the rendered manifest inside each node directory
    pub manifest_filename: String,
    pub environment_scope: EnvironmentScope,
    /// Entries prepended to `PATH` for the builder
    pub prepend_path: Vec<PathBuf>,
    /// Parse and order the graph without creating or building anything
    pub dry_run: bool,
}

impl GraphBuildRequest {
    pub fn new(input_path: PathBuf, workdir: PathBuf, cache_dir: PathBuf) -> Self {
        Self {
            input_path,
            workdir,
            cache_dir,
            cache_env_var: DEFAULT_CACHE_ENV_VAR.to_string(),
            scope: Scope::default(),
            manifest_filename: DEFAULT_MANIFEST_FILENAME.to_string(),
            environment_scope: EnvironmentScope::default(),
            prepend_path: Vec::new(),
            dry_run: false,
        }
    }
}
