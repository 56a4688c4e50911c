//! In-process tests for the inkmark command.
//!
//! Each test parses an argv, resolves settings against a mock environment and
//! runs the transformation with mock stdin, so no terminal is needed.

use std::io::Write;

use clap::Parser;
use inkmark_cli::args::Cli;
use inkmark_cli::config::{Settings, LOG_ENV_VAR};
use inkmark_cli::env::{MockEnv, MockStdin};
use inkmark_cli::{execute, run_main};

fn run_with(args: &[&str], stdin: MockStdin) -> anyhow::Result<String> {
    let mut argv = vec!["inkmark"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let settings = Settings::resolve(&cli, &MockEnv::new())?;
    execute(&cli, &settings, &stdin)
}

fn run(args: &[&str]) -> String {
    run_with(args, MockStdin::terminal()).unwrap()
}

#[test]
fn greeting() {
    insta::assert_snapshot!(
        run(&["--var", "name=Ada", "@b{Hello} %name, you have %count messages"]),
        @"<b>Hello</b> Ada, you have ??? messages"
    );
}

#[test]
fn input_is_escaped_by_default() {
    insta::assert_snapshot!(
        run(&["<i>not markup</i> @i{markup}"]),
        @"&lt;i&gt;not markup&lt;/i&gt; <i>markup</i>"
    );
}

#[test]
fn raw_input_is_not_escaped() {
    insta::assert_snapshot!(run(&["--raw", "<s>x</s> @u{y}"]), @"<s>x</s> <u>y</u>");
}

#[test]
fn variable_values_are_escaped_by_default() {
    insta::assert_snapshot!(
        run(&["--var", "who=<script>x</script>", "hi %who <script>"]),
        @"hi &lt;script&gt;x&lt;/script&gt; &lt;script&gt;"
    );
}

#[test]
fn plain_format_keeps_literal_entities_in_values() {
    assert_eq!(
        run(&["--format", "plain", "--var", "who=a &amp; b", "%who"]),
        "a &amp; b"
    );
}

#[test]
fn raw_leaves_variable_values_alone() {
    insta::assert_snapshot!(
        run(&["--raw", "--var", "who=<em>x</em>", "%who"]),
        @"<em>x</em>"
    );
}

#[test]
fn plain_format() {
    insta::assert_snapshot!(
        run(&["--format", "plain", "@bi{Fish} & @u{chips}"]),
        @"Fish & chips"
    );
}

#[test]
fn term_format_with_forced_color() {
    let output = run(&["--format", "term", "--force-color", "@b{bold} text"]);
    assert!(output.contains("\x1b[1m"));
    assert!(output.contains("bold"));
    assert!(output.ends_with(" text"));
}

#[test]
fn piped_stdin() {
    let output = run_with(&[], MockStdin::piped("@u{piped}\n")).unwrap();
    insta::assert_snapshot!(output, @"<u>piped</u>");
}

#[test]
fn no_input_fails() {
    let err = run_with(&[], MockStdin::terminal()).unwrap_err();
    assert!(format!("{err:#}").contains("no input"));
}

#[test]
fn vars_file_with_override() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "num_preguntas: 200\ntema: Rust").unwrap();
    let path = file.path().to_str().unwrap();

    insta::assert_snapshot!(
        run(&["--vars", path, "--var", "tema=Go", "%num_preguntas sobre @b{%tema}"]),
        @"200 sobre <b>Go</b>"
    );
}

#[test]
fn single_pass_flag() {
    let args = ["--var", "a=%b", "--var", "b=deep", "%a"];
    assert_eq!(run(&args), "deep");

    let mut single = vec!["--single-pass"];
    single.extend_from_slice(&args);
    assert_eq!(run(&single), "%b");
}

#[test]
fn substitution_cap_flag() {
    let output = run(&["--max-substitutions", "1", "--var", "x=%x", "%x"]);
    assert_eq!(output, "%x");
}

#[test]
fn unsupported_vars_file() {
    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let path = file.path().to_str().unwrap();
    let err = run_with(&["--vars", path, "x"], MockStdin::terminal()).unwrap_err();
    assert!(format!("{err:#}").contains("unsupported file format"));
}

#[test]
fn env_log_level_is_validated() {
    let cli = Cli::try_parse_from(["inkmark", "x"]).unwrap();
    let env = MockEnv::new().with_var(LOG_ENV_VAR, "nonsense");
    assert!(Settings::resolve(&cli, &env).is_err());
}

fn exit_code(args: &[&str], env: &MockEnv) -> (i32, String) {
    let mut argv = vec!["inkmark"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let code = run_main(&cli, env, &MockStdin::terminal(), &mut out);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn run_main_success_exits_zero() {
    let (code, out) = exit_code(&["@b{ok}"], &MockEnv::new());
    assert_eq!(code, 0);
    assert_eq!(out, "<b>ok</b>\n");
}

#[test]
fn run_main_bad_env_log_level_exits_one() {
    let env = MockEnv::new().with_var(LOG_ENV_VAR, "nonsense");
    let (code, out) = exit_code(&["x"], &env);
    assert_eq!(code, 1);
    assert!(out.is_empty());
}

#[test]
fn run_main_missing_input_exits_one() {
    let (code, out) = exit_code(&[], &MockEnv::new());
    assert_eq!(code, 1);
    assert!(out.is_empty());
}
