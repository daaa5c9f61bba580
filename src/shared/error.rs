use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These let callers tell a failing external build apart from a usage error
/// or a broken input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every node was built (or planned, in dry-run mode)
    Success = 0,
    /// The external builder returned a non-zero status for a node
    BuildFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Any other failure: parse error, cycle, directory collision, I/O error
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the run.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ForgeError>() {
            Some(ForgeError::ExternalBuildFailed { .. }) => ExitCode::BuildFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BuildFailed => write!(f, "Build Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while generating and building a dependency graph.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Malformed declaration on line {line_number}: '{line}'\nReason: {reason}\n\n💡 Hint: Each declaration must look like 'a -> b' (requires) or 'a ~> b' (build-requires)")]
    Parse {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Dependency cycle detected: {cycle}\n\n💡 Hint: Remove one of the edges on the cycle; nodes can only be built in dependency order")]
    CycleDetected { cycle: String },

    #[error("Directory for node '{node}' already exists: {path}\n\n💡 Hint: Two node names resolve to the same reference, or the workdir was reused from a previous run")]
    DirectoryExists { node: String, path: PathBuf },

    #[error("External builder failed for node '{node}' ({status})\n\n💡 Hint: Inspect the generated manifest in {path}")]
    ExternalBuildFailed {
        node: String,
        status: String,
        path: PathBuf,
    },

    #[error("Failed to start external builder '{program}'\nDetails: {details}\n\n💡 Hint: Check that the builder is installed and on PATH, or set it with --builder")]
    BuilderUnavailable { program: String, details: String },

    #[error("Edge-list file not found: {path}\n\n💡 Hint: Pass the graph description file as the first argument")]
    EdgeListNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a writable directory that is not a symbolic link")]
    InvalidDirectory { path: PathBuf, reason: String },

    /// Validation error for settings and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}
