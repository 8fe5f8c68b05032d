//! Unit tests for graph input validation and edge extraction.

use rstest::rstest;

use crate::error::GraphError;

use super::{AdjacencyList, AdjacencyMatrix, Edge, EdgeList, Graph};

fn pairs(graph: &impl Graph) -> Vec<(usize, usize)> {
    graph
        .edges()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}

#[rstest]
#[case::ordered(Edge::new(1, 4), Edge::new(1, 4))]
#[case::reversed(Edge::new(4, 1), Edge::new(1, 4))]
#[case::self_loop(Edge::new(2, 2), Edge::new(2, 2))]
fn canonical_orders_endpoints(#[case] edge: Edge, #[case] expected: Edge) {
    assert_eq!(edge.canonical(), expected);
    assert_eq!(edge.is_self_loop(), edge.source() == edge.target());
}

#[test]
fn matrix_rejects_ragged_rows() {
    let rows: Vec<Vec<u8>> = vec![vec![0, 1], vec![1]];
    let err = AdjacencyMatrix::try_from_rows(&rows).expect_err("ragged rows must fail");
    assert_eq!(
        err,
        GraphError::NonSquareMatrix {
            row: 1,
            columns: 1,
            rows: 2
        }
    );
}

#[test]
fn matrix_rejects_wide_rows() {
    let err = AdjacencyMatrix::try_from_bool_rows(&[[true, false, false]])
        .expect_err("a 1x3 matrix is not square");
    assert!(matches!(err, GraphError::NonSquareMatrix { row: 0, columns: 3, rows: 1 }));
}

#[test]
fn matrix_rejects_non_binary_entries() {
    let err = AdjacencyMatrix::try_from_rows(&[[0_u8, 2], [0, 0]])
        .expect_err("entries must be 0 or 1");
    assert_eq!(
        err,
        GraphError::InvalidMatrixEntry {
            row: 0,
            column: 1,
            value: 2
        }
    );
}

#[test]
fn empty_matrix_is_valid() {
    let rows: [[u8; 0]; 0] = [];
    let matrix = AdjacencyMatrix::try_from_rows(&rows).expect("empty matrix is valid");
    assert_eq!(matrix.node_count(), 0);
    assert_eq!(matrix.entries().count(), 0);
    assert!(pairs(&matrix).is_empty());
}

#[test]
fn matrix_entries_report_every_set_cell() {
    let matrix = AdjacencyMatrix::try_from_rows(&[[1_u8, 1, 0], [1, 0, 0], [0, 1, 0]])
        .expect("matrix is valid");
    let entries: Vec<_> = matrix
        .entries()
        .map(|edge| (edge.source(), edge.target()))
        .collect();
    assert_eq!(entries, vec![(0, 0), (0, 1), (1, 0), (2, 1)]);
}

#[test]
fn matrix_edges_fold_symmetric_and_one_sided_entries() {
    let matrix = AdjacencyMatrix::try_from_rows(&[[1_u8, 1, 0], [1, 0, 0], [0, 1, 0]])
        .expect("matrix is valid");
    assert_eq!(pairs(&matrix), vec![(0, 0), (0, 1), (1, 2)]);
}

#[rstest]
#[case(0, 0, true)]
#[case(2, 1, true)]
#[case(1, 2, true)]
#[case(0, 2, false)]
#[case(3, 0, false)]
fn matrix_connectivity_ignores_direction(#[case] a: usize, #[case] b: usize, #[case] expected: bool) {
    let matrix = AdjacencyMatrix::try_from_bool_rows(&[
        [true, false, false],
        [false, false, false],
        [false, true, false],
    ])
    .expect("matrix is valid");
    assert_eq!(matrix.is_connected(a, b), expected);
}

#[test]
fn edge_list_rejects_out_of_range_endpoint() {
    let err = EdgeList::new(3, [(0, 1), (1, 3)]).expect_err("node 3 is out of range");
    assert_eq!(
        err,
        GraphError::NodeOutOfRange {
            node: 3,
            node_count: 3
        }
    );
}

#[test]
fn edge_list_keeps_duplicates_and_orientation() {
    let edges = EdgeList::new(3, [(2, 1), (1, 2), (0, 0)]).expect("edges are valid");
    assert_eq!(edges.len(), 3);
    assert_eq!(edges.as_slice()[0], Edge::new(2, 1));
    assert_eq!(pairs(&edges), vec![(1, 2), (1, 2), (0, 0)]);
}

const fn listed(edges: &EdgeList) -> (usize, bool, usize) {
    (edges.len(), edges.is_empty(), edges.as_slice().len())
}

#[test]
fn edge_list_getters_are_usable_in_const_helpers() {
    let edges = EdgeList::new(4, [(0, 1), (3, 2)]).expect("edges are valid");
    assert_eq!(listed(&edges), (2, false, 2));
    assert_eq!(listed(&EdgeList::default()), (0, true, 0));
}

#[test]
fn edge_list_without_edges_keeps_node_count() {
    let edges = EdgeList::new(6, Vec::<(usize, usize)>::new()).expect("no edges is valid");
    assert!(edges.is_empty());
    assert_eq!(edges.node_count(), 6);
}

#[test]
fn adjacency_list_rejects_unknown_neighbour() {
    let err = AdjacencyList::new(vec![vec![1], vec![5]]).expect_err("node 5 is out of range");
    assert_eq!(
        err,
        GraphError::NodeOutOfRange {
            node: 5,
            node_count: 2
        }
    );
}

#[rstest]
#[case::symmetric(vec![vec![1], vec![0], vec![3], vec![2]], vec![(0, 1), (2, 3)])]
#[case::forward_only(vec![vec![1, 2], vec![], vec![]], vec![(0, 1), (0, 2)])]
#[case::backward_only(vec![vec![], vec![0], vec![1]], vec![(0, 1), (1, 2)])]
#[case::self_loop(vec![vec![0], vec![]], vec![(0, 0)])]
fn adjacency_list_reports_each_undirected_edge_once(
    #[case] lists: Vec<Vec<usize>>,
    #[case] expected: Vec<(usize, usize)>,
) {
    let graph = AdjacencyList::new(lists).expect("lists are valid");
    assert_eq!(pairs(&graph), expected);
}

#[test]
fn adjacency_list_neighbours_are_bounds_checked() {
    let graph = AdjacencyList::new(vec![vec![1], vec![0]]).expect("lists are valid");
    assert_eq!(graph.neighbours(0), Some([1].as_slice()));
    assert_eq!(graph.neighbours(2), None);
}
