//! Command implementations for fixture-render.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the value and output resolution shared by
//! `render` and `check`.

mod check;
mod paths;
mod render;


use crate::cli::{Command, OutputArgs, ValueArgs};
use crate::error::{FixtureError, Result};
use crate::record::ConfigRecord;
use crate::render::{DEFAULT_INDENT, RenderOptions, render_with};
use crate::values::{MAX_INDENT, ValueMap, ValuesFile};
use std::io::Write;
use tracing::{debug, trace, warn};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Paths(args) => paths::cmd_paths(args),
    }
}

/// Load the values file (if any) and resolve profile and overrides.
fn resolve_values(args: &ValueArgs) -> Result<(ValuesFile, ValueMap)> {
    let file = match &args.values_file {
        Some(path) => ValuesFile::load(path)?,
        None => ValuesFile::default(),
    };

    let values = file.resolve(args.profile.as_deref(), &args.vars)?;
    if values.is_empty() {
        warn!("no values supplied; pass --values FILE or --var KEY=VALUE");
    }
    debug!(keys = ?values.keys().collect::<Vec<_>>(), "resolved values");
    for (key, value) in values.iter() {
        trace!(key, %value, "resolved value");
    }

    Ok((file, values))
}

/// Command-line choices win over the values file, which wins over defaults.
fn render_options(file: &ValuesFile, output: &OutputArgs) -> Result<RenderOptions> {
    let mode = output.format.or(file.format).unwrap_or_default();
    let indent = output.indent.or(file.indent).unwrap_or(DEFAULT_INDENT);
    if indent > MAX_INDENT {
        return Err(FixtureError::UserError(format!(
            "--indent must be at most {} (found {})",
            MAX_INDENT, indent
        )));
    }
    Ok(RenderOptions { mode, indent })
}

/// Resolve values, build the record, and render it, all before any output.
fn render_document(values: &ValueArgs, output: &OutputArgs) -> Result<String> {
    let (file, values) = resolve_values(values)?;
    let options = render_options(&file, output)?;
    let record = ConfigRecord::build(&values)?;
    render_with(&record, &options)
}

/// Write `text` to stdout in one call.
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| FixtureError::UserError(format!("failed to write to stdout: {}", e)))
}
