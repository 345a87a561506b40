//! `--var KEY=VALUE` command-line overrides.

use crate::record::paths::is_valid_path;
use serde_json::Value;
use std::str::FromStr;

/// One `KEY=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct VarOverride {
    pub key: String,
    pub value: Value,
}

impl FromStr for VarOverride {
    type Err = String;

    /// Split on the first `=`. The value is read as YAML, so `1` is an
    /// integer and `[a, b]` a sequence; text YAML cannot read stays a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid variable format '{}': expected KEY=VALUE", s))?;
        let key = key.trim();
        if !is_valid_path(key) {
            return Err(format!(
                "invalid variable key '{}': expected a dotted path such as 'config.a'",
                key
            ));
        }

        let value = if raw.is_empty() {
            Value::String(String::new())
        } else {
            serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        };

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }
}

/// clap value parser for `--var`.
pub fn parse_var(s: &str) -> Result<VarOverride, String> {
    s.parse()
}
