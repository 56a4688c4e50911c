//! Error types for the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling the command's inputs.
#[derive(Debug, Error)]
pub enum CliError {
    /// A setting had a value outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No text argument, no file and nothing piped on stdin.
    #[error("no input: pass TEXT, --file, or pipe text on stdin")]
    NoInput,

    /// A file's extension does not name a supported format.
    #[error("unsupported file format for {}: expected .json, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Variables(#[from] inkmark::VariablesError),

    #[error("invalid options file: {0}")]
    Options(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
