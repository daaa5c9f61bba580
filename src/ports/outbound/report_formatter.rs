use crate::application::read_models::BuildReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the outcome of a run
pub trait ReportFormatter {
    /// Formats the report as text ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &BuildReport) -> Result<String>;
}
