use crate::graph_generation::domain::BuildEnvironment;
use crate::shared::Result;
use std::path::Path;

/// Exit status reported by the external builder for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStatus {
    code: Option<i32>,
}

impl BuildStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code, or None if the process was terminated by a signal
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// PackageBuilder port for the external package builder
///
/// The builder runs once per node, blocking until it exits. Only its exit
/// status is inspected.
pub trait PackageBuilder {
    /// Builds the package whose manifest lives in `package_dir`
    ///
    /// `environment` carries the variables the builder must see on top of the
    /// inherited environment (the isolated cache root first of all).
    ///
    /// # Errors
    /// Returns an error only when the builder cannot be run at all; a builder
    /// that runs and fails is reported through [`BuildStatus`]
    fn build(&self, package_dir: &Path, environment: &BuildEnvironment) -> Result<BuildStatus>;
}
