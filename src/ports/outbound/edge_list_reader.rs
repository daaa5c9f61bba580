use crate::shared::Result;
use std::path::Path;

/// EdgeListReader port for reading the graph description
pub trait EdgeListReader {
    /// Reads the edge-list document at `path`
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_edge_list(&self, path: &Path) -> Result<String>;
}
