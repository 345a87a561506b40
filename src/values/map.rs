//! Flat mapping from dotted paths to values.

use crate::error::{FixtureError, Result};
use crate::record::paths::{canonical_path, is_leaf_path, is_valid_path, split_index};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Dotted-path keyed values handed to the record builder.
///
/// Keys are kept sorted so iteration (and anything derived from it) is
/// deterministic. Keys are stored in their canonical spelling (see
/// [`canonical_path`]), so `a` and `config.a` name the same entry. Later
/// inserts replace earlier ones: an indexed key such as
/// `x[1]` updates element 1 of an existing sequence at `x`, and a whole
/// sequence at `x` drops any earlier `x[N]` keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: BTreeMap<String, Value>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, rejecting malformed keys.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        if !is_valid_path(&key) {
            return Err(FixtureError::UserError(format!(
                "invalid variable key '{}': expected a dotted path such as 'config.a' or 'config.nested.path.fullpath[0]'",
                key
            )));
        }
        self.put(key, value);
        Ok(())
    }

    fn put(&mut self, key: String, value: Value) {
        let key = canonical_path(&key);
        if let Some((base, index)) = split_index(&key) {
            if let Some(Value::Array(items)) = self.entries.get_mut(base) {
                if let Some(slot) = items.get_mut(index) {
                    *slot = value;
                    return;
                }
            }
        } else {
            let prefix = format!("{}[", key);
            self.entries.retain(|k, _| !k.starts_with(&prefix));
        }
        self.entries.insert(key, value);
    }

    /// Look up a value under any spelling of its path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&canonical_path(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` on top of `self`, key by key.
    pub fn overlay(&mut self, other: ValueMap) {
        for (key, value) in other.entries {
            self.put(key, value);
        }
    }

    /// Flatten a nested mapping into dotted paths.
    ///
    /// Recursion stops at paths the record consumes whole, so a mapping given
    /// for `config.a` stays a mapping.
    pub fn from_nested(nested: &Map<String, Value>) -> Result<Self> {
        let mut map = ValueMap::new();
        flatten_into(&mut map, None, nested)?;
        Ok(map)
    }
}

fn flatten_into(
    map: &mut ValueMap,
    prefix: Option<&str>,
    nested: &Map<String, Value>,
) -> Result<()> {
    for (key, value) in nested {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !is_leaf_path(&path) && !inner.is_empty() => {
                flatten_into(map, Some(&path), inner)?;
            }
            _ => map.insert(path, value.clone())?,
        }
    }
    Ok(())
}

impl<K: Into<String>> FromIterator<(K, Value)> for ValueMap {
    /// Collects without key validation; intended for literals in code and tests.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.put(key.into(), value);
        }
        map
    }
}
