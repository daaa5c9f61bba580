//! depgraph-forge - synthetic dependency graph builder
//!
//! Reads a tiny edge-list language (`a -> b` requires, `a ~> b`
//! build-requires), renders a package manifest for every node and runs an
//! external package builder on each node after its dependencies, against an
//! isolated cache root. Following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`graph_generation`): graph model, parser, resolver and traversal
//! - **Application Layer** (`application`): use case, DTOs, read models and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, builder process, console and formatters
//! - **Shared** (`shared`): error types, security checks and environment scoping
//!
//! # Example
//!
//! ```no_run
//! use depgraph_forge::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let scope = Scope::default();
//! let use_case = GenerateGraphUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWorkspace::new(),
//!     CommandPackageBuilder::conan(&scope),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = GraphBuildRequest::new(
//!     PathBuf::from("nodes.conan"),
//!     PathBuf::from("/tmp/work"),
//!     PathBuf::from("/tmp/cache"),
//! );
//! let response = use_case.execute(request)?;
//!
//! let report = BuildReportBuilder::build(&response);
//! print!("{}", ShellFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_generation;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWorkspace, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, ShellFormatter};
    pub use crate::adapters::outbound::process::CommandPackageBuilder;
    pub use crate::application::dto::{
        EnvironmentScope, GraphBuildRequest, GraphBuildResponse, OutputFormat,
    };
    pub use crate::application::read_models::{BuildReport, BuildReportBuilder};
    pub use crate::application::use_cases::GenerateGraphUseCase;
    pub use crate::graph_generation::domain::{
        BuildEnvironment, BuildOrder, DependencyGraph, NodeName, ResolvedRef, Scope,
    };
    pub use crate::graph_generation::services::{
        EdgeListParser, NodeResolver, TopologicalProcessor,
    };
    pub use crate::ports::outbound::{
        BuildStatus, EdgeListReader, NodeWorkspace, OutputPresenter, PackageBuilder,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, ForgeError};
    pub use crate::shared::Result;
}
