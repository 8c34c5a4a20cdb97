//! Diagnostics for a packaging run.
//!
//! Setup questions and the final report go to stdout; tracing output always
//! goes to stderr so it never mixes with answers piped into zipbuild or with
//! `--output-format json`.
//!
//! | Flags        | zipbuild crates log at |
//! |--------------|------------------------|
//! | (none)       | WARN                   |
//! | `-v`         | INFO                   |
//! | `-vv`        | DEBUG                  |
//! | `-vvv` ...   | TRACE                  |
//! | `-q`         | ERROR                  |
//!
//! A non-empty `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crate targets that share the verbosity level.
const TARGETS: [&str; 4] = [
    "zipbuild",
    "zipbuild_cli",
    "zipbuild_core",
    "zipbuild_adapters",
];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(level(args)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `-q` beats any number of `-v`.
fn level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Everything outside zipbuild (walkdir, zip, config) stays silent.
fn filter_for(level: LevelFilter) -> EnvFilter {
    TARGETS
        .iter()
        .fold(EnvFilter::default(), |filter, target| {
            match format!("{target}={level}").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}
