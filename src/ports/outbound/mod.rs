/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, builder process, console).
pub mod edge_list_reader;
pub mod node_workspace;
pub mod output_presenter;
pub mod package_builder;
pub mod progress_reporter;
pub mod report_formatter;

pub use edge_list_reader::EdgeListReader;
pub use node_workspace::NodeWorkspace;
pub use output_presenter::OutputPresenter;
pub use package_builder::{BuildStatus, PackageBuilder};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
