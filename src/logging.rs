//! Diagnostic logging using the `tracing` ecosystem
//!
//! Diagnostics go to stderr so stdout carries only the result lines.
//! `RUST_LOG` takes precedence over the CLI verbosity flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
