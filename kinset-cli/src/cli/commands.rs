//! Command definitions and execution for the kinset CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kinset_core::{ComponentLabels, Edge};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, InputFormat, LoadedGraph, load_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kinset", about = "Count and inspect connected components of a graph.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the number of connected components.
    Count(GraphArgs),
    /// Print the component of every node.
    Components(GraphArgs),
    /// Report whether the graph contains a cycle.
    Cycle(GraphArgs),
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Count(_) => "count",
            Self::Components(_) => "components",
            Self::Cycle(_) => "cycle",
        }
    }
}

/// Input options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the graph file.
    pub path: PathBuf,

    /// Layout of the graph file.
    #[arg(long, value_enum, default_value_t = InputFormat::Edges)]
    pub format: InputFormat,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be loaded.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Input(err) => err.code(),
        }
    }
}

/// What a command found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Number of connected components.
    Count(usize),
    /// Component assignment of every node.
    Labels(ComponentLabels),
    /// The first edge closing a cycle, if the graph has one.
    Cycle(Option<Edge>),
}

/// Result of running a command against one graph file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the graph, taken from the file stem.
    pub graph: String,
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Command specific result.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph file cannot be loaded.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kinset_cli::cli::{Cli, Command, GraphArgs, InputFormat, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4\n0 1\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Count(GraphArgs {
///         path: file.path().to_path_buf(),
///         format: InputFormat::Edges,
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.outcome, Outcome::Count(2));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, graph = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let Cli { command } = cli;
    let span = Span::current();
    span.record("command", command.name());

    let (query, args): (fn(&LoadedGraph) -> Outcome, GraphArgs) = match command {
        Command::Count(args) => (
            |graph: &LoadedGraph| Outcome::Count(graph.count_components()),
            args,
        ),
        Command::Components(args) => (
            |graph: &LoadedGraph| Outcome::Labels(graph.label_components()),
            args,
        ),
        Command::Cycle(args) => (
            |graph: &LoadedGraph| Outcome::Cycle(graph.find_cycle_edge()),
            args,
        ),
    };
    let graph_name = derive_graph_name(&args.path);
    span.record("graph", graph_name.as_str());

    let graph = load_graph(&args.path, args.format)?;
    let outcome = query(&graph);
    info!(
        graph = graph_name.as_str(),
        nodes = graph.node_count(),
        "command completed"
    );
    Ok(Report {
        graph: graph_name,
        node_count: graph.node_count(),
        outcome,
    })
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `report` to `writer` as line-oriented text.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use kinset_cli::cli::{Outcome, Report, render_report};
/// let report = Report {
///     graph: "demo".into(),
///     node_count: 4,
///     outcome: Outcome::Count(2),
/// };
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "nodes: 4\ncomponents: 2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match &report.outcome {
        Outcome::Count(count) => {
            writeln!(writer, "nodes: {}", report.node_count)?;
            writeln!(writer, "components: {count}")?;
        }
        Outcome::Labels(labels) => {
            writeln!(writer, "nodes: {}", report.node_count)?;
            writeln!(writer, "components: {}", labels.component_count())?;
            for (node, id) in labels.labels().iter().enumerate() {
                writeln!(writer, "{node}\t{id}")?;
            }
        }
        Outcome::Cycle(Some(edge)) => {
            writeln!(writer, "cycle: yes ({}, {})", edge.source(), edge.target())?;
        }
        Outcome::Cycle(None) => writeln!(writer, "cycle: no")?,
    }
    Ok(())
}
