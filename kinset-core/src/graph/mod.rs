//! Undirected graph inputs accepted by the component counters.
//!
//! Three representations are supported: a square `0/1` adjacency matrix, a
//! flat edge list and a per-node adjacency list. Each validates every node id
//! at construction, so counting never has to reject an edge half way through
//! a run.

mod adjacency;
mod edge_list;
mod matrix;

#[cfg(test)]
mod tests;

pub use self::{adjacency::AdjacencyList, edge_list::EdgeList, matrix::AdjacencyMatrix};

use crate::error::GraphError;

/// A single undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target` as given.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the same edge with `source <= target`.
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.source <= self.target {
            self
        } else {
            Self::new(self.target, self.source)
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns `true` for an edge from a node to itself.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// An undirected graph over nodes `0..node_count`.
///
/// Implementations guarantee every yielded endpoint is `< node_count`.
pub trait Graph {
    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Every edge in canonical `source <= target` form and a deterministic
    /// order. Symmetric entries of a matrix or adjacency list are reported
    /// once; repeated entries of an edge list are reported as listed.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;
}

fn check_node(node: usize, node_count: usize) -> Result<(), GraphError> {
    if node < node_count {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node, node_count })
    }
}
