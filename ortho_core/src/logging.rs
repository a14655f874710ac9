//! Logging infrastructure for Ortho.
//!
//! Provides centralized tracing setup for all binaries.

use tracing_subscriber::EnvFilter;

/// Initialize logging with sensible defaults
///
/// Logs go to stderr so that recommendation output on stdout stays clean
/// (and machine-readable with `--json`). Default level is WARN; override
/// with the RUST_LOG env var.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
