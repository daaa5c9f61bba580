use crate::graph_generation::domain::{BuildEnvironment, Scope};
use crate::ports::outbound::{BuildStatus, PackageBuilder};
use crate::shared::error::ForgeError;
use crate::shared::Result;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Default external builder program
pub const DEFAULT_BUILDER_PROGRAM: &str = "conan";

/// Default builder arguments; placeholders are filled from the [`Scope`]
pub const DEFAULT_BUILDER_ARGS: &[&str] = &["create", ".", "{user}/{channel}"];

/// CommandPackageBuilder adapter running the builder as a child process
///
/// The child runs in the node directory with the resolved build environment
/// layered over the inherited one. Its stdout is redirected to our stderr so
/// the report on stdout stays parseable.
pub struct CommandPackageBuilder {
    program: String,
    args: Vec<String>,
    quiet: bool,
}

impl CommandPackageBuilder {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            quiet: false,
        }
    }

    /// Builder invoking `conan create . user/channel`
    pub fn conan(scope: &Scope) -> Self {
        let args = DEFAULT_BUILDER_ARGS.iter().map(|a| a.to_string()).collect();
        Self::new(DEFAULT_BUILDER_PROGRAM, args).with_scope(scope)
    }

    /// Replaces `{user}` and `{channel}` in every argument
    pub fn with_scope(mut self, scope: &Scope) -> Self {
        self.args = self
            .args
            .into_iter()
            .map(|arg| {
                arg.replace("{user}", scope.user())
                    .replace("{channel}", scope.channel())
            })
            .collect();
        self
    }

    /// Discards the builder's output
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn output_streams(&self) -> (Stdio, Stdio) {
        if self.quiet {
            return (Stdio::null(), Stdio::null());
        }
        (Stdio::from(io::stderr()), Stdio::inherit())
    }
}

impl PackageBuilder for CommandPackageBuilder {
    fn build(&self, package_dir: &Path, environment: &BuildEnvironment) -> Result<BuildStatus> {
        let variables = environment.resolve(|name| std::env::var_os(name))?;
        let (stdout, stderr) = self.output_streams();

        debug!(
            program = %self.program,
            args = ?self.args,
            dir = %package_dir.display(),
            "Running external builder"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(package_dir)
            .envs(variables)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|e| ForgeError::BuilderUnavailable {
                program: self.program.clone(),
                details: e.to_string(),
            })?;

        Ok(BuildStatus::from_code(status.code()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_conan_default_arguments() {
        let builder = CommandPackageBuilder::conan(&Scope::default());
        assert_eq!(builder.program(), "conan");
        assert_eq!(builder.args(), ["create", ".", "user/channel"]);
    }

    #[test]
    fn test_with_scope_substitutes_placeholders() {
        let scope = Scope::new("lasote", "stable").unwrap();
        let builder = CommandPackageBuilder::new(
            "conan",
            vec!["create".to_string(), "--user={user}".to_string(), "{channel}".to_string()],
        )
        .with_scope(&scope);

        assert_eq!(builder.args(), ["create", "--user=lasote", "stable"]);
    }

    #[test]
    fn test_successful_builder() {
        let dir = TempDir::new().unwrap();
        let builder = CommandPackageBuilder::new("true", vec![]).quiet(true);

        let status = builder.build(dir.path(), &BuildEnvironment::new()).unwrap();
        assert!(status.is_success());
    }

    #[test]
    fn test_failing_builder_reports_status() {
        let dir = TempDir::new().unwrap();
        let builder = CommandPackageBuilder::new("false", vec![]).quiet(true);

        let status = builder.build(dir.path(), &BuildEnvironment::new()).unwrap();
        assert!(!status.is_success());
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_missing_builder_program() {
        let dir = TempDir::new().unwrap();
        let builder = CommandPackageBuilder::new("depgraph-forge-no-such-builder", vec![]);

        let err = builder
            .build(dir.path(), &BuildEnvironment::new())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ForgeError>(),
            Some(ForgeError::BuilderUnavailable { .. })
        ));
    }

    #[test]
    fn test_builder_runs_in_package_dir() {
        let dir = TempDir::new().unwrap();
        let builder = CommandPackageBuilder::new(
            "sh",
            vec!["-c".to_string(), "test -f conanfile.py".to_string()],
        )
        .quiet(true);

        let status = builder.build(dir.path(), &BuildEnvironment::new()).unwrap();
        assert!(!status.is_success());

        std::fs::write(dir.path().join("conanfile.py"), "").unwrap();
        let status = builder.build(dir.path(), &BuildEnvironment::new()).unwrap();
        assert!(status.is_success());
    }

    #[test]
    fn test_builder_sees_cache_variable() {
        let dir = TempDir::new().unwrap();
        let environment =
            BuildEnvironment::new().with_scalar("DEPGRAPH_FORGE_TEST_CACHE", "/tmp/cache-root");
        let builder = CommandPackageBuilder::new(
            "sh",
            vec![
                "-c".to_string(),
                "test \"$DEPGRAPH_FORGE_TEST_CACHE\" = /tmp/cache-root".to_string(),
            ],
        )
        .quiet(true);

        let status = builder.build(dir.path(), &environment).unwrap();
        assert!(status.is_success());
        assert!(std::env::var_os("DEPGRAPH_FORGE_TEST_CACHE").is_none());
    }

    #[test]
    fn test_builder_sees_prepended_path_list() {
        let dir = TempDir::new().unwrap();
        let environment = BuildEnvironment::new().with_path_list(
            "DEPGRAPH_FORGE_TEST_PATHS",
            vec![PathBuf::from("/opt/first"), PathBuf::from("/opt/second")],
        );
        let builder = CommandPackageBuilder::new(
            "sh",
            vec![
                "-c".to_string(),
                "test \"$DEPGRAPH_FORGE_TEST_PATHS\" = /opt/first:/opt/second".to_string(),
            ],
        )
        .quiet(true);

        let status = builder.build(dir.path(), &environment).unwrap();
        assert!(status.is_success());
    }
}
