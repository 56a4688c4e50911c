//! Logging setup.
//!
//! Logs go to stderr so they never mix with the rendered output on stdout.
//! Records emitted by the `inkmark` library through the `log` facade are
//! forwarded into the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::default().add_directive(level.level_filter().into())
}

/// Installs the global subscriber.
///
/// If a subscriber is already installed (tests, embedding) the call is a
/// no-op; the first one wins.
pub fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
