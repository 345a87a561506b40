//! Error types for the fixture-render CLI.
//!
//! Uses thiserror for derive macros; every variant maps to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for fixture-render operations.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A required dotted path has no supplied value.
    #[error("missing value for required key '{path}'")]
    MissingKey { path: String },

    /// A supplied value does not have the shape the record needs.
    #[error("value at '{path}' has the wrong shape: expected {expected}, found {found}")]
    TypeShape {
        path: String,
        expected: String,
        found: String,
    },

    /// User provided invalid arguments or input files.
    #[error("{0}")]
    UserError(String),

    /// Rendered output differs from the expected fixture.
    #[error("output does not match fixture: {0}")]
    Mismatch(String),
}

impl FixtureError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::MissingKey { .. } => exit_codes::BUILD_FAILURE,
            FixtureError::TypeShape { .. } => exit_codes::BUILD_FAILURE,
            FixtureError::UserError(_) => exit_codes::USER_ERROR,
            FixtureError::Mismatch(_) => exit_codes::MISMATCH,
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        FixtureError::MissingKey { path: path.into() }
    }

    pub(crate) fn shape(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        FixtureError::TypeShape {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Result type alias for fixture-render operations.
pub type Result<T> = std::result::Result<T, FixtureError>;
