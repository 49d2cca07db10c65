//! Command-line interface for computing shortest-path neighbour tables.
//!
//! The `run` command reads an adjacency text file, writes the vertex mapping,
//! searches every vertex, and emits one padded neighbour row per vertex.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyArg, run_cli};

#[cfg(test)]
mod test_helpers;
