//! Error types for loading variables.
//!
//! Transformation itself never fails: malformed markup degrades to literal
//! text. Errors only arise when building a [`Variables`](crate::Variables)
//! mapping from external input.

use thiserror::Error;

/// Errors that can occur when loading or assigning variables.
#[derive(Debug, Error)]
pub enum VariablesError {
    /// The JSON source could not be parsed.
    #[error("invalid JSON variables: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML source could not be parsed.
    #[error("invalid YAML variables: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The source parsed, but its top level is not a mapping.
    #[error("variables must be a mapping at the top level, got {found}")]
    NotAMapping { found: &'static str },

    /// A `name=value` assignment is missing its `=`.
    #[error("invalid assignment '{0}', expected NAME=VALUE")]
    InvalidAssignment(String),

    /// The name is not a valid placeholder identifier.
    #[error("invalid variable name '{0}'")]
    InvalidName(String),
}

/// Result type for variable operations.
pub type Result<T> = std::result::Result<T, VariablesError>;
