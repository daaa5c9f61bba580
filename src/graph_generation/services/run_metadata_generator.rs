use crate::graph_generation::domain::RunMetadata;
use chrono::Utc;
use uuid::Uuid;

/// RunMetadataGenerator service stamping a run with a time and unique id
pub struct RunMetadataGenerator;

impl RunMetadataGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> RunMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        RunMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Metadata for this binary, versioned from Cargo.toml
    pub fn generate_default_metadata() -> RunMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
