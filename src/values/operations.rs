//! Values file loading, validation, and resolution.

use super::map::ValueMap;
use super::model::ValuesFile;
use super::overrides::VarOverride;
use crate::error::{FixtureError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Largest accepted pretty-mode indent.
pub const MAX_INDENT: usize = 16;

impl ValuesFile {
    /// Load a values file from disk.
    ///
    /// # Returns
    ///
    /// * `Ok(ValuesFile)` - Successfully loaded and validated
    /// * `Err(FixtureError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FixtureError::UserError(format!(
                "failed to read values file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            variables = file.variables.len(),
            profiles = file.profiles.len(),
            "loaded values file"
        );
        Ok(file)
    }

    /// Parse a values file from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: ValuesFile = serde_yaml::from_str(yaml)
            .map_err(|e| FixtureError::UserError(format!("failed to parse values YAML: {}", e)))?;

        file.validate()?;
        Ok(file)
    }

    /// Validation rules:
    /// - profile names must be non-empty
    /// - `indent` must not exceed [`MAX_INDENT`]
    pub fn validate(&self) -> Result<()> {
        if self.profiles.keys().any(|name| name.trim().is_empty()) {
            return Err(FixtureError::UserError(
                "values validation failed: profile names must be non-empty".to_string(),
            ));
        }

        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                return Err(FixtureError::UserError(format!(
                    "values validation failed: indent must be at most {} (found {})",
                    MAX_INDENT, indent
                )));
            }
        }

        Ok(())
    }

    /// Names of the profiles this file defines, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Flatten base variables, then the selected profile, then overrides.
    pub fn resolve(&self, profile: Option<&str>, overrides: &[VarOverride]) -> Result<ValueMap> {
        let mut values = ValueMap::from_nested(&self.variables)?;

        if let Some(name) = profile {
            let overlay = self.profiles.get(name).ok_or_else(|| {
                let available = if self.profiles.is_empty() {
                    "none defined".to_string()
                } else {
                    self.profile_names().join(", ")
                };
                FixtureError::UserError(format!(
                    "unknown profile '{}' (available: {})",
                    name, available
                ))
            })?;
            let overlay = ValueMap::from_nested(overlay)?;
            debug!(profile = name, keys = overlay.len(), "applying profile");
            values.overlay(overlay);
        }

        for var in overrides {
            debug!(key = %var.key, "applying --var override");
            values.insert(var.key.clone(), var.value.clone())?;
        }

        Ok(values)
    }
}
