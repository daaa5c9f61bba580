use depgraph_forge::prelude::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded builder invocation
#[derive(Debug, Clone)]
pub struct BuildCall {
    pub package_dir: PathBuf,
    pub environment: BuildEnvironment,
    /// Value of the observed process variable at build time
    pub process_value: Option<OsString>,
    /// Whether the manifest was already on disk when the builder ran
    pub manifest_present: bool,
}

impl BuildCall {
    pub fn dir_name(&self) -> String {
        self.package_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Mock PackageBuilder recording every call; clones share the record
#[derive(Default, Clone)]
pub struct MockPackageBuilder {
    calls: Arc<Mutex<Vec<BuildCall>>>,
    failing: Vec<String>,
    observed_variable: Option<String>,
}

impl MockPackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns exit code 1 for the node directory with this name
    pub fn failing_on(mut self, dir_name: &str) -> Self {
        self.failing.push(dir_name.to_string());
        self
    }

    /// Records the process-wide value of `name` at every call
    pub fn observing(mut self, name: &str) -> Self {
        self.observed_variable = Some(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<BuildCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn built_dirs(&self) -> Vec<String> {
        self.calls().iter().map(BuildCall::dir_name).collect()
    }
}

impl PackageBuilder for MockPackageBuilder {
    fn build(&self, package_dir: &Path, environment: &BuildEnvironment) -> Result<BuildStatus> {
        let call = BuildCall {
            package_dir: package_dir.to_path_buf(),
            environment: environment.clone(),
            process_value: self
                .observed_variable
                .as_deref()
                .and_then(std::env::var_os),
            manifest_present: package_dir.join("conanfile.py").is_file(),
        };
        let failed = self.failing.contains(&call.dir_name());
        self.calls.lock().unwrap().push(call);

        if failed {
            return Ok(BuildStatus::failure(1));
        }
        Ok(BuildStatus::success())
    }
}
