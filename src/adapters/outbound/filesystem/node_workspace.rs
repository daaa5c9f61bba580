use crate::ports::outbound::NodeWorkspace;
use crate::shared::error::ForgeError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// FileSystemWorkspace adapter creating node directories on disk
///
/// Directories are created with a single `create_dir`, so an existing entry is
/// detected atomically instead of by a separate existence check.
pub struct FileSystemWorkspace;

impl FileSystemWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeWorkspace for FileSystemWorkspace {
    fn create_node_dir(&self, workdir: &Path, dir_name: &str, node: &str) -> Result<PathBuf> {
        let node_dir = workdir.join(dir_name);

        match fs::create_dir(&node_dir) {
            Ok(()) => {
                debug!(node, path = %node_dir.display(), "Created node directory");
                Ok(node_dir)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(ForgeError::DirectoryExists {
                node: node.to_string(),
                path: node_dir,
            }
            .into()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to create node directory {}", node_dir.display())
            }),
        }
    }

    fn write_manifest(&self, node_dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
        let manifest_path = node_dir.join(filename);
        fs::write(&manifest_path, content).map_err(|e| ForgeError::FileWriteError {
            path: manifest_path.clone(),
            details: e.to_string(),
        })?;
        Ok(manifest_path)
    }
}
