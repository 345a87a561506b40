//! Implementation of the `fixture-render check` command.
//!
//! Renders the record and compares it with a golden file, either byte for
//! byte or, with `--structural`, as parsed data so formatting differences
//! between the two render modes do not count.

use super::{render_document, write_stdout};
use crate::cli::CheckArgs;
use crate::error::{FixtureError, Result};
use crate::render::parse_rendered;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::info;

/// Execute the `check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let rendered = render_document(&args.values, &args.output)?;

    let expected = std::fs::read_to_string(&args.expected).map_err(|e| {
        FixtureError::UserError(format!(
            "failed to read expected fixture '{}': {}",
            args.expected.display(),
            e
        ))
    })?;

    let difference = if args.structural {
        compare_structural(&expected, &rendered)?
    } else {
        compare_text(&expected, &rendered)
    };

    if let Some(difference) = difference {
        return Err(FixtureError::Mismatch(format!(
            "{}: {}",
            args.expected.display(),
            difference
        )));
    }

    info!(expected = %args.expected.display(), structural = args.structural, "fixture matches");
    write_stdout(&format!("fixture matches: {}\n", args.expected.display()))
}

/// Describe the first textual difference, or `None` when identical.
pub(super) fn compare_text(expected: &str, rendered: &str) -> Option<String> {
    if expected == rendered {
        return None;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let rendered_lines: Vec<&str> = rendered.lines().collect();

    for (i, (e, r)) in expected_lines.iter().zip(&rendered_lines).enumerate() {
        if e != r {
            return Some(format!(
                "line {} differs\n  expected: {}\n  rendered: {}",
                i + 1,
                e,
                r
            ));
        }
    }

    if expected_lines.len() != rendered_lines.len() {
        return Some(format!(
            "expected {} lines, rendered {}",
            expected_lines.len(),
            rendered_lines.len()
        ));
    }

    Some("line endings or trailing newline differ".to_string())
}

/// Parse both documents and describe the first data difference.
pub(super) fn compare_structural(expected: &str, rendered: &str) -> Result<Option<String>> {
    let expected = parse_rendered(expected).map_err(|e| {
        FixtureError::UserError(format!("failed to parse expected fixture: {}", e))
    })?;
    let rendered = parse_rendered(rendered).map_err(|e| {
        FixtureError::UserError(format!("failed to parse rendered output: {}", e))
    })?;
    Ok(first_difference(&expected, &rendered, ""))
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn first_difference(expected: &Value, rendered: &Value, path: &str) -> Option<String> {
    match (expected, rendered) {
        (Value::Object(e), Value::Object(r)) => {
            let keys: BTreeSet<&String> = e.keys().chain(r.keys()).collect();
            keys.into_iter().find_map(|key| {
                let child = child_path(path, key);
                match (e.get(key), r.get(key)) {
                    (Some(ev), Some(rv)) => first_difference(ev, rv, &child),
                    (Some(_), None) => Some(format!("{}: missing from rendered output", child)),
                    (None, _) => Some(format!("{}: not in expected fixture", child)),
                }
            })
        }
        (Value::Array(e), Value::Array(r)) if e.len() == r.len() => e
            .iter()
            .zip(r)
            .enumerate()
            .find_map(|(i, (ev, rv))| first_difference(ev, rv, &format!("{}[{}]", path, i))),
        (Value::Array(e), Value::Array(r)) => Some(format!(
            "{}: expected {} elements, rendered {}",
            path,
            e.len(),
            r.len()
        )),
        (e, r) if e != r => Some(format!("{}: expected {}, rendered {}", path, e, r)),
        _ => None,
    }
}
