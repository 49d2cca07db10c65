//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyArg, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// `run` command over `matrix` writing the mapping next to it.
pub(super) fn run_command(dir: &TempDir, matrix: PathBuf, neighbours: usize) -> RunCommand {
    RunCommand {
        matrix,
        neighbours,
        mapping: dir.path().join("mapping.txt"),
        output: None,
        strategy: StrategyArg::Auto,
        threads: None,
    }
}

/// Runs `command` and returns the summary and the rows written to stdout.
pub(super) fn run_capturing(command: RunCommand) -> Result<(ExecutionSummary, String), CliError> {
    let mut stdout = Vec::new();
    let summary = run_cli(
        Cli {
            command: Command::Run(command),
        },
        &mut stdout,
    )?;
    match String::from_utf8(stdout) {
        Ok(rows) => Ok((summary, rows)),
        Err(err) => panic!("rows must be UTF-8: {err}"),
    }
}

pub(super) fn run_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_capturing(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn read(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => panic!("failed to read {}: {err}", path.display()),
    }
}
