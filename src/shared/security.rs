use crate::shared::error::ForgeError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for an edge-list file (10 MB)
pub const MAX_EDGE_LIST_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to inspect
/// * `operation` - Operation named in the error message (e.g., "read", "build")
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to inspect
/// * `file_description` - Label used in error messages (e.g., "edge-list file")
///
/// # Errors
/// Returns an error if:
/// - metadata for the path cannot be read (including when it does not exist)
/// - the path is a symbolic link
/// - the path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Security
/// Bounds how much of an edge-list file is read into memory; see
/// [`MAX_EDGE_LIST_SIZE`].
///
/// # Errors
/// Returns an error if `file_size` exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Makes sure `path` is a usable run directory, creating it when missing.
///
/// Missing parents are created as well.
///
/// # Arguments
/// * `path` - Workdir or cache directory of the run
///
/// # Errors
/// Returns [`ForgeError::InvalidDirectory`] if:
/// - the directory cannot be created
/// - the path is a symbolic link
/// - the path exists but is not a directory
pub fn ensure_run_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| ForgeError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: format!("Failed to create directory: {}", e),
        })?;
        return Ok(());
    }

    validate_not_symlink(path, "build").map_err(|e| ForgeError::InvalidDirectory {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !path.is_dir() {
        return Err(ForgeError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
