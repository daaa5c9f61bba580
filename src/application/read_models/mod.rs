//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a flat, serializable picture of
//! a finished run.

mod build_report;
mod build_report_builder;

pub use build_report::{BuildReport, NodeView, RunMetadataView};
pub use build_report_builder::BuildReportBuilder;
