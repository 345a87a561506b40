//! Implementation of the `fixture-render paths` command.

use super::write_stdout;
use crate::cli::PathsArgs;
use crate::error::Result;
use crate::record::paths::{placeholder_tokens, required_paths};

/// Execute the `paths` command.
pub fn cmd_paths(args: PathsArgs) -> Result<()> {
    write_stdout(&paths_listing(args.placeholders))
}

/// One path (or placeholder token) per line, in record order.
pub(super) fn paths_listing(placeholders: bool) -> String {
    let items = if placeholders {
        placeholder_tokens()
    } else {
        required_paths()
    };
    let mut out = items.join("\n");
    out.push('\n');
    out
}
