//! Values handed to the record builder.
//!
//! Values come from a YAML values file (base `variables` plus optional named
//! `profiles`) and from `--var KEY=VALUE` overrides, in that order of
//! precedence, lowest first. Everything is flattened into a [`ValueMap`]
//! keyed by dotted path.

mod map;
mod model;
mod operations;
mod overrides;

#[cfg(test)]
mod tests;

pub use map::ValueMap;
pub use model::ValuesFile;
pub use operations::MAX_INDENT;
pub use overrides::{VarOverride, parse_var};
