//! Deterministic text output for a [`ConfigRecord`].
//!
//! Two modes:
//!
//! - **flat**: one `<key>: <value>` line per top-level key, values in Python
//!   literal notation, record order preserved
//! - **pretty**: the whole record as an indented JSON document
//!
//! Both encode the same data; [`parse_rendered`] reads either back.

mod literal;
mod parse;

#[cfg(test)]
mod tests;

pub use literal::Literal;
pub use parse::parse_rendered;

use crate::error::{FixtureError, Result};
use crate::record::ConfigRecord;
use crate::record::paths::CONFIG_KEY;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// Default indent width for pretty output.
pub const DEFAULT_INDENT: usize = 3;

/// Output format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// `<key>: <value>` lines in Python literal notation (default).
    #[default]
    Flat,
    /// Indented JSON document.
    Pretty,
}

/// How to render a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Spaces per nesting level in pretty mode.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Flat,
            indent: DEFAULT_INDENT,
        }
    }
}

/// Render in flat mode: one line per top-level key, in record order.
pub fn render(record: &ConfigRecord) -> String {
    let mut out = String::new();
    for (key, value) in top_level_entries(record) {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out
}

/// Render the full nested record as indented JSON.
///
/// Record keys keep record order; keys inside supplied mapping values come
/// out sorted.
pub fn render_pretty(record: &ConfigRecord, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| FixtureError::UserError(format!("failed to serialize record: {}", e)))?;

    let mut text = String::from_utf8(buf)
        .map_err(|e| FixtureError::UserError(format!("rendered output is not UTF-8: {}", e)))?;
    text.push('\n');
    Ok(text)
}

/// Render with explicit options.
pub fn render_with(record: &ConfigRecord, options: &RenderOptions) -> Result<String> {
    match options.mode {
        RenderMode::Flat => Ok(render(record)),
        RenderMode::Pretty => render_pretty(record, options.indent),
    }
}

/// Top-level keys of the record as ordered literals.
fn top_level_entries(record: &ConfigRecord) -> Vec<(&'static str, Literal)> {
    let config = record.config();

    let mut fields: Vec<(String, Literal)> = config
        .scalars()
        .iter()
        .map(|(name, value)| (name.to_string(), Literal::from(*value)))
        .collect();

    let fullpath = Literal::List(config.fullpath().iter().map(Literal::from).collect());
    let nested = Literal::Dict(vec![(
        "path".to_string(),
        Literal::Dict(vec![("fullpath".to_string(), fullpath)]),
    )]);
    fields.push(("nested".to_string(), nested));
    fields.push((
        "config_interpolation".to_string(),
        Literal::from(config.interpolation()),
    ));

    vec![(CONFIG_KEY, Literal::Dict(fields))]
}
