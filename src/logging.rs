//! Diagnostic logging setup.
//!
//! Logs are written to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the command-line verbosity.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps `-v` count and `--quiet` to a maximum level
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(verbose, quiet).to_string())
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
