use clap::Parser;

use inkmark_cli::args::Cli;
use inkmark_cli::env::{RealEnv, RealStdin};
use inkmark_cli::run_main;

fn main() {
    let cli = Cli::parse();
    let code = run_main(&cli, &RealEnv, &RealStdin, &mut std::io::stdout().lock());
    std::process::exit(code);
}
