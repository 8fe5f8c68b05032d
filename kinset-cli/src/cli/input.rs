//! Plain-text graph readers.
//!
//! All formats skip blank lines and lines starting with `#`. Line numbers in
//! errors are one-based and count every physical line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use kinset_core::{
    AdjacencyList, AdjacencyMatrix, ComponentLabels, Edge, EdgeList, Graph, GraphError,
    count_components, count_components_in_matrix, find_cycle_edge, label_components,
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Largest node count [`read_edge_list`] accepts.
///
/// Counting allocates a parent index and a rank per node up front, so the
/// cap keeps a one-line header from requesting gigabytes.
pub const MAX_NODE_COUNT: usize = 1 << 26;

/// Text layouts understood by [`load_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One row per line of whitespace separated `0`/`1` entries.
    Matrix,
    /// A node count line followed by one `u v` pair per line.
    Edges,
    /// One `node: neighbour ...` line per node, numbered from zero.
    Adjacency,
}

impl InputFormat {
    /// Returns the flag spelling of this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Edges => "edges",
            Self::Adjacency => "adjacency",
        }
    }
}

/// Errors raised while reading a graph file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line failed part way through the input.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line that could not be read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The node count of an edge list was negative, not a number, or larger
    /// than [`MAX_NODE_COUNT`].
    #[error("line {line}: `{value}` is not a valid node count")]
    InvalidSize {
        /// Line holding the node count.
        line: usize,
        /// The rejected text.
        value: String,
    },
    /// An edge list contained no node count line.
    #[error("edge list is empty; expected a node count on the first line")]
    MissingNodeCount,
    /// A line could not be split into the expected fields.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// Offending line.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// An adjacency list line was labelled out of sequence.
    #[error("line {line}: expected node {expected} but found node {found}")]
    UnexpectedNode {
        /// Offending line.
        line: usize,
        /// Node id that should have come next.
        expected: usize,
        /// Node id that was present.
        found: usize,
    },
    /// The parsed values did not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl InputError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "INPUT_OPEN",
            Self::Read { .. } => "INPUT_READ",
            Self::InvalidSize { .. } => "INPUT_INVALID_SIZE",
            Self::MissingNodeCount => "INPUT_MISSING_NODE_COUNT",
            Self::MalformedLine { .. } => "INPUT_MALFORMED_LINE",
            Self::UnexpectedNode { .. } => "INPUT_UNEXPECTED_NODE",
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// A graph read from disk, kept in the representation it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedGraph {
    /// Read with [`InputFormat::Matrix`].
    Matrix(AdjacencyMatrix),
    /// Read with [`InputFormat::Edges`].
    Edges(EdgeList),
    /// Read with [`InputFormat::Adjacency`].
    Adjacency(AdjacencyList),
}

impl LoadedGraph {
    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Matrix(graph) => graph.node_count(),
            Self::Edges(graph) => graph.node_count(),
            Self::Adjacency(graph) => graph.node_count(),
        }
    }

    /// Counts connected components. Matrices are counted entry by entry.
    #[must_use]
    pub fn count_components(&self) -> usize {
        match self {
            Self::Matrix(graph) => count_components_in_matrix(graph),
            Self::Edges(graph) => count_components(graph),
            Self::Adjacency(graph) => count_components(graph),
        }
    }

    /// Labels every node with its component.
    #[must_use]
    pub fn label_components(&self) -> ComponentLabels {
        match self {
            Self::Matrix(graph) => label_components(graph),
            Self::Edges(graph) => label_components(graph),
            Self::Adjacency(graph) => label_components(graph),
        }
    }

    /// Returns the first edge that closes a cycle, if any.
    #[must_use]
    pub fn find_cycle_edge(&self) -> Option<Edge> {
        match self {
            Self::Matrix(graph) => find_cycle_edge(graph),
            Self::Edges(graph) => find_cycle_edge(graph),
            Self::Adjacency(graph) => find_cycle_edge(graph),
        }
    }
}

/// Reads the graph stored at `path` in the given `format`.
///
/// # Errors
/// Returns [`InputError`] when the file cannot be read or does not describe
/// a valid graph.
#[instrument(
    level = "debug",
    err,
    skip_all,
    fields(path = %path.display(), format = format.as_str()),
)]
pub fn load_graph(path: &Path, format: InputFormat) -> Result<LoadedGraph, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let graph = match format {
        InputFormat::Matrix => LoadedGraph::Matrix(read_matrix(reader)?),
        InputFormat::Edges => LoadedGraph::Edges(read_edge_list(reader)?),
        InputFormat::Adjacency => LoadedGraph::Adjacency(read_adjacency_list(reader)?),
    };
    debug!(nodes = graph.node_count(), "loaded graph");
    Ok(graph)
}

/// Reads a square `0/1` matrix, one row per line.
///
/// # Errors
/// Returns [`InputError::MalformedLine`] for entries that are not small
/// integers and [`InputError::Graph`] for non-square or non-binary matrices.
pub fn read_matrix(reader: impl BufRead) -> Result<AdjacencyMatrix, InputError> {
    let mut rows = Vec::new();
    for entry in content_lines(reader) {
        let (line, text) = entry?;
        let row = text
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| InputError::MalformedLine {
                    line,
                    reason: format!("`{token}` is not a matrix entry"),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(row);
    }
    Ok(AdjacencyMatrix::try_from_rows(&rows)?)
}

/// Reads a node count followed by `u v` edge lines.
///
/// # Errors
/// Returns [`InputError::MissingNodeCount`] for empty input,
/// [`InputError::InvalidSize`] for a negative, non-numeric or oversized count,
/// [`InputError::MalformedLine`] for edge lines without exactly two node ids
/// and [`InputError::Graph`] for endpoints outside the graph.
pub fn read_edge_list(reader: impl BufRead) -> Result<EdgeList, InputError> {
    let mut lines = content_lines(reader);
    let (header_line, header) = lines.next().ok_or(InputError::MissingNodeCount)??;
    let node_count = header
        .parse::<usize>()
        .ok()
        .filter(|&count| count <= MAX_NODE_COUNT)
        .ok_or_else(|| InputError::InvalidSize {
            line: header_line,
            value: header.clone(),
        })?;

    let mut pairs = Vec::new();
    for entry in lines {
        let (line, text) = entry?;
        let mut tokens = text.split_whitespace();
        let pair = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(source), Some(target), None) => {
                (parse_node(source, line)?, parse_node(target, line)?)
            }
            _ => {
                return Err(InputError::MalformedLine {
                    line,
                    reason: "expected exactly two node ids".to_owned(),
                });
            }
        };
        pairs.push(pair);
    }
    Ok(EdgeList::new(node_count, pairs)?)
}

/// Reads `node: neighbour ...` lines with nodes numbered `0, 1, 2, ...`.
///
/// # Errors
/// Returns [`InputError::MalformedLine`] for lines without a `:` or with
/// non-numeric ids, [`InputError::UnexpectedNode`] when a label is out of
/// sequence and [`InputError::Graph`] for neighbours outside the graph.
pub fn read_adjacency_list(reader: impl BufRead) -> Result<AdjacencyList, InputError> {
    let mut neighbours: Vec<Vec<usize>> = Vec::new();
    for entry in content_lines(reader) {
        let (line, text) = entry?;
        let Some((label, rest)) = text.split_once(':') else {
            return Err(InputError::MalformedLine {
                line,
                reason: "expected `node: neighbours`".to_owned(),
            });
        };
        let found = parse_node(label.trim(), line)?;
        let expected = neighbours.len();
        if found != expected {
            return Err(InputError::UnexpectedNode {
                line,
                expected,
                found,
            });
        }
        let list = rest
            .split_whitespace()
            .map(|token| parse_node(token, line))
            .collect::<Result<Vec<usize>, _>>()?;
        neighbours.push(list);
    }
    Ok(AdjacencyList::new(neighbours)?)
}

fn content_lines(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), InputError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, read)| {
            let line = index + 1;
            match read {
                Err(source) => Some(Err(InputError::Read { line, source })),
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        None
                    } else {
                        Some(Ok((line, trimmed.to_owned())))
                    }
                }
            }
        })
}

fn parse_node(token: &str, line: usize) -> Result<usize, InputError> {
    token.parse().map_err(|_| InputError::MalformedLine {
        line,
        reason: format!("`{token}` is not a node id"),
    })
}
