//! Command-line front end for inkmark.
//!
//! Wires the transformer to a process: text comes from an argument, a file or
//! stdin; variables come from `--var` pairs and an optional JSON/YAML file;
//! user text and variable values are entity-escaped before parsing unless
//! `--raw` is given; the result is written as HTML, terminal-styled text, or plain text.
//!
//! ```text
//! $ inkmark --var name=Ada '@b{Hello} %name, you have %count messages'
//! <b>Hello</b> Ada, you have ??? messages
//! ```

pub mod args;
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;

use std::io::Write;

use anyhow::Context;
use inkmark::{escape_html, Parser};

use crate::args::Cli;
use crate::config::{LogLevel, Settings};
use crate::env::{EnvReader, StdinReader};
use crate::logging::init_logging;

/// Runs one transformation and returns the rendered output.
pub fn execute(cli: &Cli, settings: &Settings, stdin: &dyn StdinReader) -> anyhow::Result<String> {
    let raw = input::read_text(cli, stdin).context("failed to read input text")?;
    let variables = input::load_variables(cli).context("failed to load variables")?;

    let (text, variables) = if settings.escape {
        (escape_html(&raw), variables.map_resolved(escape_html))
    } else {
        (raw, variables)
    };

    let parser = Parser::new().with_options(settings.options.clone());
    let styled = parser.transform(&text, &variables);
    tracing::debug!(
        input_len = text.len(),
        output_len = styled.content().len(),
        "transformed"
    );

    Ok(render::render(
        styled.content(),
        settings.format,
        settings.force_color,
    ))
}

/// Runs the whole command and returns the process exit code.
///
/// Output goes to `out`; diagnostics go to stderr. Both settings and run
/// failures exit with 1. Usage errors never reach here, clap exits with 2.
pub fn run_main(
    cli: &Cli,
    env: &dyn EnvReader,
    stdin: &dyn StdinReader,
    out: &mut dyn Write,
) -> i32 {
    let settings = match Settings::resolve(cli, env) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(LogLevel::default());
            tracing::error!(error = %e, "invalid settings");
            eprintln!("inkmark: {e}");
            return 1;
        }
    };
    init_logging(settings.log_level);

    let result = execute(cli, &settings, stdin)
        .and_then(|output| writeln!(out, "{output}").context("failed to write output"));
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "transformation failed");
            eprintln!("inkmark: {e:#}");
            1
        }
    }
}
