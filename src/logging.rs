//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so stdout stays clean for the emitted config.
//! `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::{fmt, EnvFilter};

/// Map `-v` occurrences to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lintrc={}", level_for(verbosity))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
