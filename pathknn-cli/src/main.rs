//! `pathknn` binary entry point.
//!
//! Initializes logging, runs the parsed command, and maps failures to a
//! non-zero exit code after logging the error with its stable code.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pathknn_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field, info};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli, io::stdout().lock()).context("failed to execute command")?;
    info!(
        vertices = summary.vertices,
        edges = summary.edges,
        padded_rows = summary.padded_rows,
        "run completed"
    );
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::code)
            .map(field::display);
        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
