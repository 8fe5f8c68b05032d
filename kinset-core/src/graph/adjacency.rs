//! Per-node adjacency lists.

use crate::error::GraphError;

use super::{Edge, Graph, check_node};

/// One neighbour list per node; node `i`'s neighbours are `lists[i]`.
///
/// Lists need not be symmetric. A neighbour recorded on both sides of a pair
/// yields a single edge, matching how the lists would be written for an
/// undirected graph.
///
/// # Examples
/// ```
/// use kinset_core::{AdjacencyList, Graph};
///
/// let lists = AdjacencyList::new(vec![vec![1], vec![0], vec![3], vec![2]])?;
/// assert_eq!(lists.node_count(), 4);
/// assert_eq!(lists.edges().count(), 2);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbours: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Validates every neighbour id against the number of lists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for the first neighbour outside
    /// `[0, lists.len())`.
    pub fn new(neighbours: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let node_count = neighbours.len();
        for &neighbour in neighbours.iter().flatten() {
            check_node(neighbour, node_count)?;
        }
        Ok(Self { neighbours })
    }

    /// Returns the neighbours recorded for `node`, or `None` when out of range.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> Option<&[usize]> {
        self.neighbours.get(node).map(Vec::as_slice)
    }

    fn lists_contain(&self, node: usize, neighbour: usize) -> bool {
        self.neighbours(node)
            .is_some_and(|list| list.contains(&neighbour))
    }
}

impl Graph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    // A backwards entry `node -> lower` is only reported when `lower` does not
    // already list `node`; the forward entry covers it otherwise.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(move |(node, list)| {
                list.iter()
                    .copied()
                    .filter(move |&other| other >= node || !self.lists_contain(other, node))
                    .map(move |other| Edge::new(node, other).canonical())
            })
    }
}
