//! # zipbuild CLI
//!
//! Packs a project's build output into a versioned zip or tar archive.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults, config file, environment).
//! 4. Build the [`OutputManager`].
//! 5. Run the packaging command.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / system error              |
//! |  2   | User / input error, or user said no  |
//! |  3   | Resource not found                   |
//! |  4   | Configuration error                  |

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let mut output = None;
    match run(cli, &mut output) {
        Ok(()) => {
            info!("zipbuild completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, output.as_deref()),
    }
}

/// Steps 3 to 5. `output` is filled in as soon as it exists so errors can
/// be rendered through it.
#[instrument(skip_all)]
fn run(cli: Cli, output: &mut Option<Arc<OutputManager>>) -> CliResult<()> {
    let working_dir =
        std::env::current_dir().with_cli_context(|| "Failed to determine the working directory")?;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_ref(), &working_dir)
        .with_cli_context(|| "Failed to load configuration")?;

    // ── 4. Build output manager ───────────────────────────────────────────
    let manager = Arc::new(OutputManager::new(&cli.global, &config));
    *output = Some(Arc::clone(&manager));

    // ── 5. Package ────────────────────────────────────────────────────────
    commands::pack::execute(cli.pack, working_dir, &config, manager)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, output: Option<&OutputManager>) -> ExitCode {
    err.log();

    match (&err, output) {
        (CliError::Cancelled { .. }, Some(output)) => {
            let _ = output.bye();
        }
        _ => {
            // stderr, so the message survives a redirected stdout
            let colored = output.is_some_and(OutputManager::supports_color)
                && std::io::IsTerminal::is_terminal(&std::io::stderr());
            let msg = if colored {
                err.format_colored(verbose)
            } else {
                err.format_plain(verbose)
            };
            eprint!("{msg}");
        }
    }

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check: missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
