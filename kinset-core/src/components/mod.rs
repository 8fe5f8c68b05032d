//! Connected-component queries answered with a [`DisjointSet`].
//!
//! Every entry point builds a fresh disjoint set sized to the graph, unions
//! the graph's edges and reads the result back. The inputs differ only in how
//! edges are extracted; node ids were validated when the graph was built, so
//! the union loop itself cannot fail.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::GraphError,
    graph::{AdjacencyList, AdjacencyMatrix, Edge, EdgeList, Graph},
    labels::ComponentLabels,
};


/// Counts the connected components of an adjacency matrix.
///
/// Every set entry `(i, j)` is unioned as stored, so asymmetric matrices are
/// read as undirected. Diagonal entries are skipped.
///
/// # Examples
/// ```
/// use kinset_core::{AdjacencyMatrix, count_components_in_matrix};
///
/// let matrix = AdjacencyMatrix::try_from_rows(&[
///     [1_u8, 1, 0, 0],
///     [1, 1, 0, 0],
///     [0, 0, 1, 1],
///     [0, 0, 1, 1],
/// ])?;
/// assert_eq!(count_components_in_matrix(&matrix), 2);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
#[must_use]
#[instrument(level = "debug", skip(matrix), fields(nodes = matrix.node_count()))]
pub fn count_components_in_matrix(matrix: &AdjacencyMatrix) -> usize {
    let mut set = DisjointSet::new(matrix.node_count());
    for entry in matrix.entries().filter(|entry| !entry.is_self_loop()) {
        set.merge(entry.source(), entry.target());
    }
    let components = set.component_count();
    debug!(components, "counted matrix components");
    components
}

/// Counts the connected components of `node_count` nodes joined by `pairs`.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfRange`] when any endpoint is outside
/// `[0, node_count)`. Every pair is checked before the first union runs.
///
/// # Examples
/// ```
/// use kinset_core::count_components_in_edges;
///
/// assert_eq!(count_components_in_edges(4, [(0, 1), (2, 3)])?, 2);
/// assert_eq!(count_components_in_edges(4, [(0, 1), (1, 2), (2, 3)])?, 1);
/// assert!(count_components_in_edges(4, [(0, 4)]).is_err());
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
pub fn count_components_in_edges<I>(node_count: usize, pairs: I) -> Result<usize, GraphError>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let edges = EdgeList::new(node_count, pairs)?;
    Ok(count_components(&edges))
}

/// Counts the connected components described by per-node neighbour lists.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfRange`] when a neighbour id is not the
/// index of one of the lists.
///
/// # Examples
/// ```
/// use kinset_core::count_components_in_adjacency_list;
///
/// let lists = vec![vec![1], vec![0], vec![3], vec![2]];
/// assert_eq!(count_components_in_adjacency_list(lists)?, 2);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
pub fn count_components_in_adjacency_list(
    neighbours: Vec<Vec<usize>>,
) -> Result<usize, GraphError> {
    let lists = AdjacencyList::new(neighbours)?;
    Ok(count_components(&lists))
}

/// Counts the connected components of any [`Graph`].
#[must_use]
#[instrument(level = "debug", skip(graph), fields(nodes = graph.node_count()))]
pub fn count_components<G: Graph>(graph: &G) -> usize {
    let (set, edges) = union_all(graph);
    let components = set.component_count();
    debug!(edges, components, "counted components");
    components
}

/// Labels every node of `graph` with its component.
///
/// # Examples
/// ```
/// use kinset_core::{EdgeList, label_components};
///
/// let graph = EdgeList::new(5, [(4, 0), (2, 3)])?;
/// let labels = label_components(&graph);
/// let ids: Vec<usize> = labels.labels().iter().map(|id| id.get()).collect();
/// assert_eq!(ids, vec![0, 1, 2, 2, 0]);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
#[must_use]
#[instrument(level = "debug", skip(graph), fields(nodes = graph.node_count()))]
pub fn label_components<G: Graph>(graph: &G) -> ComponentLabels {
    let (mut set, edges) = union_all(graph);
    let labels = set.component_labels();
    debug!(
        edges,
        components = labels.component_count(),
        "labelled components"
    );
    labels
}

/// Returns the first edge, in [`Graph::edges`] order, whose endpoints were
/// already connected by earlier edges.
///
/// A self-loop closes a cycle on its own, as does a repeated edge.
///
/// # Examples
/// ```
/// use kinset_core::{Edge, EdgeList, find_cycle_edge};
///
/// let triangle = EdgeList::new(4, [(0, 1), (1, 2), (2, 0), (2, 3)])?;
/// assert_eq!(find_cycle_edge(&triangle), Some(Edge::new(0, 2)));
///
/// let path = EdgeList::new(3, [(0, 1), (1, 2)])?;
/// assert_eq!(find_cycle_edge(&path), None);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
#[must_use]
#[instrument(level = "debug", skip(graph), fields(nodes = graph.node_count()))]
pub fn find_cycle_edge<G: Graph>(graph: &G) -> Option<Edge> {
    let mut set = DisjointSet::new(graph.node_count());
    let closing = graph
        .edges()
        .find(|edge| !set.merge(edge.source(), edge.target()));
    debug!(found = closing.is_some(), "searched for a cycle");
    closing
}

/// Returns `true` when `graph` contains an undirected cycle.
#[must_use]
pub fn has_cycle<G: Graph>(graph: &G) -> bool {
    find_cycle_edge(graph).is_some()
}

fn union_all<G: Graph>(graph: &G) -> (DisjointSet, usize) {
    let mut set = DisjointSet::new(graph.node_count());
    let mut edges = 0_usize;
    for edge in graph.edges() {
        set.merge(edge.source(), edge.target());
        edges += 1;
    }
    (set, edges)
}
