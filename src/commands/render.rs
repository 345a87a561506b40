//! Implementation of the `fixture-render render` command.

use super::{render_document, write_stdout};
use crate::cli::RenderArgs;
use crate::error::Result;
use tracing::info;

/// Execute the `render` command.
///
/// Nothing reaches stdout unless the record builds and renders completely.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let text = render_document(&args.values, &args.output)?;
    info!(bytes = text.len(), "rendered record");
    write_stdout(&text)
}
