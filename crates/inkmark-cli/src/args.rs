//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::LogLevel;
use crate::render::OutputFormat;

/// Render inline @-tag markup and %placeholders as styled text.
#[derive(Parser, Debug, Clone)]
#[command(name = "inkmark", version, about)]
pub struct Cli {
    /// Text to transform. Read from --file or stdin when omitted.
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Set a variable (repeatable). Overrides values from --vars.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,

    /// Load variables from a JSON or YAML file.
    #[arg(long = "vars", value_name = "FILE")]
    pub vars_file: Option<PathBuf>,

    /// Load transform options from a JSON or YAML file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Do not escape HTML-significant characters in the input.
    #[arg(long)]
    pub raw: bool,

    /// Never substitute placeholders found inside variable values.
    #[arg(long)]
    pub single_pass: bool,

    /// Maximum number of placeholder substitutions.
    #[arg(long, value_name = "N")]
    pub max_substitutions: Option<usize>,

    /// Emit terminal styles even when stdout is not a terminal.
    #[arg(long)]
    pub force_color: bool,

    /// Log level (trace, debug, info, warn, error). Falls back to INKMARK_LOG.
    #[arg(long, value_name = "LEVEL", value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,
}
