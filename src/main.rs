//! fixture-render: deterministic output for variable-profile fixtures.
//!
//! This is the main entry point for the `fixture-render` CLI. It parses
//! arguments, installs logging, dispatches to the appropriate command
//! handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod record;
pub mod render;
pub mod values;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = logging::init_tracing(cli.verbose).and_then(|()| commands::dispatch(cli.command));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(exit_code = err.exit_code(), "command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
