/// Process adapters for running the external package builder
mod command_builder;

pub use command_builder::{CommandPackageBuilder, DEFAULT_BUILDER_ARGS, DEFAULT_BUILDER_PROGRAM};
