//! Text and variable acquisition.

use std::fs;

use inkmark::Variables;

use crate::args::Cli;
use crate::config::FileFormat;
use crate::env::StdinReader;
use crate::error::CliError;

/// Reads the text to transform.
///
/// Sources in order: the positional argument, `--file`, then piped stdin. A
/// single trailing newline from a file or stdin is dropped so that piping
/// `echo` output does not style or emit a stray line break.
pub fn read_text(cli: &Cli, stdin: &dyn StdinReader) -> Result<String, CliError> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    let text = if let Some(path) = &cli.file {
        tracing::debug!(path = %path.display(), "reading text from file");
        fs::read_to_string(path)?
    } else if !stdin.is_terminal() {
        tracing::debug!("reading text from stdin");
        stdin.read_to_string()?
    } else {
        return Err(CliError::NoInput);
    };
    Ok(strip_trailing_newline(text))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Builds the variables mapping: the `--vars` file first, then every `--var`
/// assignment in order, later ones winning.
pub fn load_variables(cli: &Cli) -> Result<Variables, CliError> {
    let mut variables = match &cli.vars_file {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            match FileFormat::from_path(path)? {
                FileFormat::Json => Variables::from_json_str(&source)?,
                FileFormat::Yaml => Variables::from_yaml_str(&source)?,
            }
        }
        None => Variables::new(),
    };

    for assignment in &cli.assignments {
        let (name, value) = Variables::parse_assignment(assignment)?;
        variables.set(name, value);
    }

    tracing::debug!(count = variables.len(), "variables loaded");
    Ok(variables)
}
