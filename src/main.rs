//! Catalog - product catalog browser
//!
//! Lists and filters a product catalog grouped by category and ranks
//! products by a weighted aggregate of their critics' normalized scores.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use catalog_core::error::{CatalogError, ExitCode as CatalogExitCode};
use catalog_core::logging;
use cli::{requested_format, Cli, OutputFormat};

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
        Ok(()) => exit_with(CatalogExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

/// Clap prints its own errors, help and version text. Only when the argv
/// asked for JSON does a rejected command line become a usage envelope.
fn parse_failure(err: clap::Error) -> ExitCode {
    if !err.use_stderr() || requested_format(env::args().skip(1)) != Some(OutputFormat::Json) {
        err.exit();
    }

    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    let usage = CatalogError::UsageError(message.to_string());
    report(&usage, OutputFormat::Json, false);
    exit_with(usage.exit_code())
}

fn report(error: &CatalogError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

fn exit_with(code: CatalogExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
