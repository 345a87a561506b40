//! CLI argument parsing for fixture-render.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::render::RenderMode;
use crate::values::{VarOverride, parse_var};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// fixture-render: deterministic output for variable-profile fixtures.
///
/// Builds the fixed `config` record from dotted-path values and prints it
/// either as flat `key: value` lines or as an indented nested document.
#[derive(Parser, Debug)]
#[command(name = "fixture-render")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the record to stdout.
    Render(RenderArgs),

    /// Render the record and compare it with an expected fixture file.
    ///
    /// Exits with code 3 when the output differs.
    Check(CheckArgs),

    /// List the dotted paths the record is built from.
    Paths(PathsArgs),
}

/// Where values come from.
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// YAML values file with `variables` and optional `profiles`.
    #[arg(long = "values", value_name = "FILE")]
    pub values_file: Option<PathBuf>,

    /// Profile from the values file to overlay on the base variables.
    #[arg(short = 'p', long = "use-profile", value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Override a single value (repeatable). VALUE is read as YAML.
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<VarOverride>,
}

/// Output format selection.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the values file `format`, then flat).
    #[arg(short, long, value_enum)]
    pub format: Option<RenderMode>,

    /// Spaces per level in pretty mode.
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub values: ValueArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Golden file holding the expected output.
    #[arg(long, value_name = "FILE")]
    pub expected: PathBuf,

    /// Compare parsed data instead of bytes.
    #[arg(long)]
    pub structural: bool,

    #[command(flatten)]
    pub values: ValueArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `paths` command.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Print `{{path}}` placeholder tokens, with the sequence spelled out per element.
    #[arg(long)]
    pub placeholders: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
