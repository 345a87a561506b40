//! ValuesFile struct definition.

use crate::render::RenderMode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Contents of a values file.
///
/// ```yaml
/// variables:
///   config:
///     a: x
///     nested:
///       path:
///         fullpath: [p0, p1, p2]
/// profiles:
///   node:
///     config_interpolation: "boilermaker:{project.name}:{project.version}"
/// format: pretty
/// ```
///
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesFile {
    /// Base values, as nested mappings and/or dotted keys.
    pub variables: Map<String, Value>,

    /// Named overlays applied on top of `variables` when selected.
    pub profiles: BTreeMap<String, Map<String, Value>>,

    /// Render mode used when the command line does not pick one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<RenderMode>,

    /// Pretty-mode indent used when the command line does not pick one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
}
