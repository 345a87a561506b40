//! The fixed-shape configuration record and its builder.
//!
//! A [`ConfigRecord`] always has the same keys and nesting:
//!
//! ```text
//! config
//! ├── a .. f
//! ├── nested.path.fullpath   (exactly 3 elements)
//! └── config_interpolation
//! ```
//!
//! Values are taken verbatim from a [`ValueMap`]; nothing is coerced. Once
//! built, a record cannot be mutated.

pub mod paths;


use crate::error::{FixtureError, Result};
use crate::values::ValueMap;
use paths::{FULLPATH, FULLPATH_LEN, INTERPOLATION, SCALAR_FIELDS, scalar_path, split_index};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The nested record rendered by this tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    config: ConfigSection,
}

/// Contents of the `config` key. Field order is render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSection {
    a: Value,
    b: Value,
    c: Value,
    d: Value,
    e: Value,
    f: Value,
    nested: Nested,
    config_interpolation: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Nested {
    path: NestedPath,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct NestedPath {
    fullpath: [Value; FULLPATH_LEN],
}

impl ConfigRecord {
    /// Assemble a record from dotted-path values.
    ///
    /// Required paths are checked in record order and the first absent one is
    /// reported. See [`paths::required_paths`].
    ///
    /// # Errors
    ///
    /// * `FixtureError::MissingKey` - a required path has no value
    /// * `FixtureError::TypeShape` - `fullpath` is not a 3-element sequence
    pub fn build(values: &ValueMap) -> Result<Self> {
        let [a, b, c, d, e, f] = SCALAR_FIELDS.map(|field| config_field(values, field));

        let config = ConfigSection {
            a: a?,
            b: b?,
            c: c?,
            d: d?,
            e: e?,
            f: f?,
            nested: Nested {
                path: NestedPath {
                    fullpath: resolve_fullpath(values)?,
                },
            },
            config_interpolation: interpolation_field(values)?,
        };

        debug!(keys = values.len(), "built config record");
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }
}

impl ConfigSection {
    /// Lettered fields `a`..`f` with their names, in record order.
    pub fn scalars(&self) -> [(&'static str, &Value); 6] {
        [
            ("a", &self.a),
            ("b", &self.b),
            ("c", &self.c),
            ("d", &self.d),
            ("e", &self.e),
            ("f", &self.f),
        ]
    }

    pub fn fullpath(&self) -> &[Value; FULLPATH_LEN] {
        &self.nested.path.fullpath
    }

    pub fn interpolation(&self) -> &Value {
        &self.config_interpolation
    }
}

/// Describe a value's kind for shape errors.
pub fn describe_kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Array(items) => format!("a sequence of {} elements", items.len()),
        Value::Object(_) => "a mapping".to_string(),
    }
}

fn config_field(values: &ValueMap, field: &str) -> Result<Value> {
    let full = scalar_path(field);
    values
        .get(&full)
        .cloned()
        .ok_or_else(|| FixtureError::missing(full))
}

fn interpolation_field(values: &ValueMap) -> Result<Value> {
    values
        .get(INTERPOLATION)
        .cloned()
        .ok_or_else(|| FixtureError::missing(INTERPOLATION))
}

/// Resolve `fullpath` from the whole-sequence key, falling back to `[N]` keys.
fn resolve_fullpath(values: &ValueMap) -> Result<[Value; FULLPATH_LEN]> {
    if let Some(whole) = values.get(FULLPATH) {
        return match whole {
            Value::Array(items) if items.len() == FULLPATH_LEN => {
                Ok([items[0].clone(), items[1].clone(), items[2].clone()])
            }
            other => Err(FixtureError::shape(
                FULLPATH,
                format!("a sequence of {} elements", FULLPATH_LEN),
                describe_kind(other),
            )),
        };
    }

    let mut indexed = false;
    for key in values.keys() {
        if let Some((base, index)) = split_index(key) {
            if base != FULLPATH {
                continue;
            }
            if index >= FULLPATH_LEN {
                return Err(FixtureError::shape(
                    key,
                    format!("an index below {}", FULLPATH_LEN),
                    format!("index {}", index),
                ));
            }
            indexed = true;
        }
    }
    if !indexed {
        return Err(FixtureError::missing(FULLPATH));
    }

    let element = |i: usize| -> Result<Value> {
        let full = format!("{}[{}]", FULLPATH, i);
        values.get(&full).cloned()
            .ok_or_else(|| FixtureError::missing(full))
    };
    Ok([element(0)?, element(1)?, element(2)?])
}
