//! Stepsearch - step-by-step graph search CLI
//!
//! Runs breadth-first or greedy best-first search over a small directed tree
//! and streams every frontier/visited/goal state change as it happens.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::report::report_error;
use stepsearch_core::error::{ExitCode as SearchExitCode, SearchError};
use stepsearch_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_code(SearchExitCode::Success),
        Err(e) => {
            report_error(&e, cli.format, cli.quiet);
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: SearchExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Clap renders its own errors unless `--format json` is on the command line,
/// in which case the failure becomes a JSON envelope on stderr.
fn parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = requests_json(env::args().skip(1));
    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let search_error = classify_parse_error(&err);
    report_error(&search_error, OutputFormat::Json, false);
    exit_code(search_error.exit_code())
}

fn classify_parse_error(err: &clap::Error) -> SearchError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => SearchError::UsageError(err.to_string()),
        _ => SearchError::Other(err.to_string()),
    }
}

/// Whether `args` select JSON output, in either `--format json` or `--format=json` form
fn requests_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
