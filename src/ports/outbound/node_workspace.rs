use crate::shared::Result;
use std::path::{Path, PathBuf};

/// NodeWorkspace port for the per-node working directories
///
/// Each node gets exactly one directory under the run's workdir. Creating a
/// directory that already exists is an error, never a silent reuse.
pub trait NodeWorkspace {
    /// Creates `workdir/dir_name` for `node` and returns its path
    ///
    /// # Errors
    /// Returns [`ForgeError::DirectoryExists`](crate::shared::error::ForgeError::DirectoryExists)
    /// if the directory is already present, or an I/O error otherwise
    fn create_node_dir(&self, workdir: &Path, dir_name: &str, node: &str) -> Result<PathBuf>;

    /// Writes the rendered manifest into a node directory
    fn write_manifest(&self, node_dir: &Path, filename: &str, content: &str) -> Result<PathBuf>;
}
