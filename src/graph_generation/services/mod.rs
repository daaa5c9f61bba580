mod edge_list_parser;
mod manifest_renderer;
mod node_resolver;
mod run_metadata_generator;
mod topological_processor;

pub use edge_list_parser::{EdgeListParser, ParsedEdgeList};
pub use manifest_renderer::{ManifestRenderer, DEFAULT_MANIFEST_FILENAME};
pub use node_resolver::NodeResolver;
pub use run_metadata_generator::RunMetadataGenerator;
pub use topological_processor::TopologicalProcessor;
