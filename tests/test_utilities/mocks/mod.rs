/// Mock implementations for testing
mod mock_edge_list_reader;
mod mock_package_builder;
mod mock_progress_reporter;

pub use mock_edge_list_reader::MockEdgeListReader;
pub use mock_package_builder::{BuildCall, MockPackageBuilder};
pub use mock_progress_reporter::{MockProgressReporter, ProgressStep};
