/// Formatter adapters for the different report formats
mod json_formatter;
mod shell_formatter;

pub use json_formatter::JsonFormatter;
pub use shell_formatter::ShellFormatter;
