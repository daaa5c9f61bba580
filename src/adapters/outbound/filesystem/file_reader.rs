use crate::ports::outbound::EdgeListReader;
use crate::shared::error::ForgeError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_EDGE_LIST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading edge-list files
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and
    /// oversized input
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "edge-list file")?;

        let metadata = fs::metadata(path)?;
        validate_file_size(metadata.len(), path, MAX_EDGE_LIST_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read edge-list file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListReader for FileSystemReader {
    fn read_edge_list(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ForgeError::EdgeListNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        self.safe_read_file(path).map_err(|e| {
            ForgeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
