//! Settings assembled from arguments, files and the environment.
//!
//! Precedence, highest first:
//!
//! 1. Command-line flags
//! 2. The `--config` options file
//! 3. `INKMARK_LOG` (log level only)
//! 4. Built-in defaults

use std::fs;
use std::path::Path;
use clap::ValueEnum;
use inkmark::{SubstitutionMode, TransformOptions};
use tracing_subscriber::filter::LevelFilter;

use crate::args::Cli;
use crate::env::EnvReader;
use crate::error::CliError;
use crate::render::OutputFormat;

/// Environment variable holding the fallback log level.
pub const LOG_ENV_VAR: &str = "INKMARK_LOG";

/// Log level matching tracing levels.
///
/// Defaults to `Warn` so that only capped substitutions are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    #[value(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name the way `--log-level` does, ignoring case.
    pub fn parse(value: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(value.trim(), true).map_err(|_| {
            CliError::InvalidConfig(format!(
                "{LOG_ENV_VAR}={value:?} is not a log level, expected trace, debug, info, warn or error"
            ))
        })
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

/// Structured file formats accepted for `--vars` and `--config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub options: TransformOptions,
    pub log_level: LogLevel,
    pub format: OutputFormat,
    /// Escape HTML-significant characters in the input before parsing.
    pub escape: bool,
    pub force_color: bool,
}

impl Settings {
    /// Resolves settings from parsed arguments and the environment.
    pub fn resolve(cli: &Cli, env: &dyn EnvReader) -> Result<Self, CliError> {
        let mut options = match &cli.config {
            Some(path) => load_options(path)?,
            None => TransformOptions::default(),
        };
        if cli.single_pass {
            options.substitution = SubstitutionMode::SinglePass;
        }
        if let Some(max) = cli.max_substitutions {
            options.max_substitutions = max;
        }

        let log_level = match cli.log_level {
            Some(level) => level,
            None => match env.var(LOG_ENV_VAR) {
                Some(value) if !value.trim().is_empty() => LogLevel::parse(&value)?,
                _ => LogLevel::default(),
            },
        };

        Ok(Self {
            options,
            log_level,
            format: cli.format,
            escape: !cli.raw,
            force_color: cli.force_color,
        })
    }
}

/// Loads [`TransformOptions`] from a JSON or YAML file.
pub fn load_options(path: &Path) -> Result<TransformOptions, CliError> {
    let format = FileFormat::from_path(path)?;
    let source = fs::read_to_string(path)?;
    match format {
        FileFormat::Json => {
            serde_json::from_str(&source).map_err(|e| CliError::Options(e.to_string()))
        }
        FileFormat::Yaml => {
            if source.trim().is_empty() {
                return Ok(TransformOptions::default());
            }
            serde_yaml::from_str(&source).map_err(|e| CliError::Options(e.to_string()))
        }
    }
}
