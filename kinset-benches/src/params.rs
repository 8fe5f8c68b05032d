//! Benchmark parameter types.

use std::fmt;

/// Size of a random graph workload.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of random edges drawn between them.
    pub edge_count: usize,
}

impl GraphBenchParams {
    /// A workload with `edges_per_node` edges for every node.
    #[must_use]
    pub const fn with_density(node_count: usize, edges_per_node: usize) -> Self {
        Self {
            node_count,
            edge_count: node_count.saturating_mul(edges_per_node),
        }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}
