use depgraph_forge::prelude::*;
use std::path::Path;

/// Mock EdgeListReader serving a fixed edge list
pub struct MockEdgeListReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockEdgeListReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl EdgeListReader for MockEdgeListReader {
    fn read_edge_list(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock edge-list read failure");
        }
        Ok(self.content.clone())
    }
}
