//! Diagnostic logging to stderr.
//!
//! Stdout carries rendered output only, so every log line goes to stderr.
//! `RUST_LOG` takes precedence over the `-v` count.

use crate::error::{FixtureError, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for(verbosity)))
        .map_err(|e| FixtureError::UserError(format!("invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time()
        .try_init()
        .map_err(|e| FixtureError::UserError(format!("failed to initialize logging: {}", e)))
}
