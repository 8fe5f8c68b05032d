//! Benchmark setup error type.

use kinset_core::GraphError;

/// Errors that may occur while preparing a benchmark workload.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated pairs did not form a valid graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A workload asked for edges over an empty node set.
    #[error("cannot place {edge_count} edges on a graph with no nodes")]
    NoNodes {
        /// Number of edges requested.
        edge_count: usize,
    },
}
