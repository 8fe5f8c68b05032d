//! Flat edge lists.

use crate::error::GraphError;

use super::{Edge, Graph, check_node};

/// A node count plus an ordered list of undirected edges.
///
/// Duplicate edges and self-edges are kept as given; they merge nothing when
/// counted but do close cycles.
///
/// # Examples
/// ```
/// use kinset_core::{EdgeList, Graph, GraphError};
///
/// let edges = EdgeList::new(4, [(0, 1), (3, 2)])?;
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges.edges().map(|e| (e.source(), e.target())).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
///
/// let err = EdgeList::new(2, [(0, 2)]).unwrap_err();
/// assert_eq!(err, GraphError::NodeOutOfRange { node: 2, node_count: 2 });
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    node_count: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Validates every endpoint against `node_count` and stores the edges in
    /// the given order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for the first endpoint outside
    /// `[0, node_count)`.
    pub fn new<I>(node_count: usize, pairs: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let edges = pairs
            .into_iter()
            .map(|(source, target)| {
                check_node(source, node_count)?;
                check_node(target, node_count)?;
                Ok(Edge::new(source, target))
            })
            .collect::<Result<Vec<_>, GraphError>>()?;
        Ok(Self { node_count, edges })
    }

    /// Returns the listed edges in input order, orientation preserved.
    #[must_use]
    pub const fn as_slice(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Returns the number of listed edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edges are listed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.edges.is_empty() }
}

impl Graph for EdgeList {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|edge| edge.canonical())
    }
}
