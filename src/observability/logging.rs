//! Logging setup for `dsc-docs`.
//!
//! Diagnostics go to stderr so that stdout carries only command output.
//! `DSC_DOCS_LOG_LEVEL` accepts any `EnvFilter` directive and overrides the
//! `-v` count.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the verbosity flag.
pub const LOG_LEVEL_ENV: &str = "DSC_DOCS_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines, colored when allowed.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Level enabled by a given number of `-v` flags.
///
/// Registry loading reports its summary at `info` and per-issue detail at
/// `debug`, so a bare invocation stays silent on imperfect data.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .with_env_var(LOG_LEVEL_ENV)
        .from_env_lossy();

    // Module paths only help once per-issue detail is visible.
    let show_target = verbosity >= 2;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(show_target)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(color.stderr_ansi()).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
