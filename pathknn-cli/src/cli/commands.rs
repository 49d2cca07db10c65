//! Command implementations and argument parsing for the pathknn CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use pathknn_core::{
    DEFAULT_NEIGHBOUR_COUNT, ExecutionStrategy, Graph, GraphError, KnnError,
    NearestNeighboursBuilder, NeighbourTable, VertexRegistry, write_mapping, write_table,
};
use pathknn_providers_text::{AdjacencyParseError, read_rows};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "pathknn",
    about = "Compute the K nearest vertices of every vertex by shortest-path distance."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the graph, write the mapping, and emit neighbour rows.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Adjacency text file with lines of the form `src: dst,weight ...`.
    pub matrix: PathBuf,

    /// Number of neighbours reported per vertex.
    #[arg(
        long,
        short = 'k',
        default_value_t = DEFAULT_NEIGHBOUR_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub neighbours: usize,

    /// Destination of the `external id -> index` mapping.
    #[arg(long)]
    pub mapping: PathBuf,

    /// Destination of the neighbour rows (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Scheduling strategy for the per-vertex searches.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Size of a dedicated worker pool (defaults to the global pool).
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when available, sequential otherwise.
    Auto,
    /// Single-threaded.
    Sequential,
    /// Worker pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening, creating, or writing a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing neighbour rows to the caller-provided stream failed.
    #[error("failed to write neighbour rows: {0}")]
    Output(#[source] io::Error),
    /// The adjacency text was malformed.
    #[error(transparent)]
    Parse(#[from] AdjacencyParseError),
    /// The parsed rows could not form a graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Configuring or running the search failed.
    #[error(transparent)]
    Core(#[from] KnnError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Parse(err) => Some(err.code()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Output(_) => None,
        }
    }
}

/// Summarises the outcome of a `run` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Distinct vertices in the graph.
    pub vertices: usize,
    /// Undirected edges read from the input.
    pub edges: usize,
    /// Rows that needed placeholder padding.
    pub padded_rows: usize,
    /// Where the rows were written, or `None` for the supplied stream.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`. Neighbour rows go to the
/// `--output` file when one is given and to `stdout` otherwise.
///
/// # Errors
/// Returns [`CliError`] when reading, searching, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use pathknn_cli::cli::{Cli, Command, RunCommand, StrategyArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let matrix = dir.path().join("matrix.txt");
/// std::fs::write(&matrix, "10: 20,9\n20: 30,9\n40:\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         matrix,
///         neighbours: 2,
///         mapping: dir.path().join("mapping.txt"),
///         output: None,
///         strategy: StrategyArg::Sequential,
///         threads: None,
///     }),
/// };
/// let mut rows = Vec::new();
/// let summary = run_cli(cli, &mut rows)?;
/// assert_eq!(summary.vertices, 4);
/// assert_eq!(String::from_utf8(rows)?.lines().count(), 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, stdout),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, stdout: impl Write) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, stdout)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, stdout),
    fields(
        matrix = field::Empty,
        neighbours = field::Empty,
        strategy = field::Empty,
    ),
)]
pub(super) fn run_command(
    command: RunCommand,
    stdout: impl Write,
) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("matrix", field::display(command.matrix.display()));
    span.record("neighbours", command.neighbours);
    span.record("strategy", field::debug(command.strategy));

    let knn = NearestNeighboursBuilder::new()
        .with_neighbour_count(command.neighbours)
        .with_execution_strategy(command.strategy.into())
        .with_threads(command.threads)
        .build()?;

    let graph = load_graph(&command.matrix)?;
    persist_mapping(&command.mapping, graph.registry())?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "preprocessing complete"
    );

    let table = knn.run(&graph)?;
    let neighbours = knn.neighbour_count().get();
    let padded_rows = table
        .rows()
        .iter()
        .filter(|row| row.real_count() < neighbours)
        .count();

    match &command.output {
        Some(path) => emit_to_file(path, &table)?,
        None => emit(stdout, &table).map_err(CliError::Output)?,
    }

    Ok(ExecutionSummary {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        padded_rows,
        output: command.output,
    })
}

#[instrument(name = "cli.load_graph", err, fields(path = %path.display()))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let rows = read_rows(BufReader::new(file))?;
    Ok(Graph::build(rows)?)
}

#[instrument(name = "cli.persist_mapping", err, skip(registry), fields(path = %path.display()))]
pub(super) fn persist_mapping(path: &Path, registry: &VertexRegistry) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    write_mapping(&mut writer, registry)
        .and_then(|()| writer.flush())
        .map_err(|source| io_error(path, source))
}

fn emit_to_file(path: &Path, table: &NeighbourTable) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    emit(file, table).map_err(|source| io_error(path, source))
}

fn emit(writer: impl Write, table: &NeighbourTable) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write_table(&mut writer, table)?;
    writer.flush()
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
