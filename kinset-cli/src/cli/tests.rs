//! Unit tests for the graph readers and command pipeline.

use std::io::Cursor;
use std::path::Path;

use kinset_core::{ComponentId, Edge, GraphError};
use kinset_test_support::graphs::two_block_matrix;
use rstest::rstest;
use tempfile::TempDir;

use super::commands::derive_graph_name;
use super::*;

fn write_graph(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("fixture must be written");
    path
}

fn run(command: fn(GraphArgs) -> Command, path: &Path, format: InputFormat) -> Report {
    run_cli(Cli {
        command: command(GraphArgs {
            path: path.to_path_buf(),
            format,
        }),
    })
    .expect("command must succeed")
}

fn render(report: &Report) -> String {
    let mut buffer = Vec::new();
    render_report(report, &mut buffer).expect("rendering to memory succeeds");
    String::from_utf8(buffer).expect("report is UTF-8")
}

#[test]
fn matrix_reader_skips_comments_and_blank_lines() {
    let text = "# two blocks\n1 1 0 0\n1 1 0 0\n\n0 0 1 1\n0 0 1 1\n";
    let matrix = read_matrix(Cursor::new(text)).expect("matrix must parse");
    let expected = kinset_core::AdjacencyMatrix::try_from_rows(&two_block_matrix())
        .expect("fixture is valid");
    assert_eq!(matrix, expected);
}

#[rstest]
#[case("1 x\n0 1\n", "INPUT_MALFORMED_LINE")]
#[case("1 0\n0\n", "GRAPH_NON_SQUARE_MATRIX")]
#[case("1 2\n0 1\n", "GRAPH_INVALID_MATRIX_ENTRY")]
#[case("1 300\n0 1\n", "INPUT_MALFORMED_LINE")]
fn matrix_reader_rejects_bad_input(#[case] text: &str, #[case] code: &str) {
    let err = read_matrix(Cursor::new(text)).expect_err("input must be rejected");
    assert_eq!(err.code(), code);
}

#[test]
fn edge_reader_reads_count_then_pairs() {
    let text = "# header\n4\n0 1\n\n2 3\n";
    let edges = read_edge_list(Cursor::new(text)).expect("edge list must parse");
    assert_eq!(edges.as_slice(), &[Edge::new(0, 1), Edge::new(2, 3)]);
}

#[test]
fn edge_reader_accepts_an_empty_graph() {
    let edges = read_edge_list(Cursor::new("0\n")).expect("zero nodes is valid");
    assert!(edges.is_empty());
}

#[rstest]
#[case("-3\n", 1, "-3")]
#[case("# comment\nfour\n0 1\n", 2, "four")]
#[case("2.5\n", 1, "2.5")]
#[case("18446744073709551615\n0 1\n", 1, "18446744073709551615")]
#[case("67108865\n", 1, "67108865")]
fn edge_reader_rejects_invalid_sizes(
    #[case] text: &str,
    #[case] expected_line: usize,
    #[case] expected_value: &str,
) {
    match read_edge_list(Cursor::new(text)) {
        Err(InputError::InvalidSize { line, value }) => {
            assert_eq!(line, expected_line);
            assert_eq!(value, expected_value);
        }
        other => panic!("expected InvalidSize, got {other:?}"),
    }
}

#[test]
fn edge_reader_accepts_the_largest_node_count() {
    let text = format!("{MAX_NODE_COUNT}\n0 1\n");
    let edges = read_edge_list(Cursor::new(text)).expect("cap itself is allowed");
    assert_eq!(edges.len(), 1);
}

#[test]
fn oversized_node_counts_fail_with_a_stable_code() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_graph(&dir, "huge.txt", "18446744073709551615\n0 1\n");
    let err = run_cli(Cli {
        command: Command::Count(GraphArgs {
            path,
            format: InputFormat::Edges,
        }),
    })
    .expect_err("oversized graphs must be rejected before counting");
    assert_eq!(err.code(), "INPUT_INVALID_SIZE");
}

#[test]
fn edge_reader_requires_a_node_count() {
    let err = read_edge_list(Cursor::new("# nothing here\n\n")).expect_err("empty input fails");
    assert!(matches!(err, InputError::MissingNodeCount));
}

#[rstest]
#[case("3\n0\n", 2)]
#[case("3\n0 1 2\n", 2)]
#[case("3\n0 1\n1 b\n", 3)]
#[case("3\n0 -1\n", 2)]
fn edge_reader_rejects_malformed_edges(#[case] text: &str, #[case] expected_line: usize) {
    match read_edge_list(Cursor::new(text)) {
        Err(InputError::MalformedLine { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn edge_reader_reports_out_of_range_endpoints() {
    let err = read_edge_list(Cursor::new("3\n0 3\n")).expect_err("node 3 is out of range");
    assert!(matches!(
        err,
        InputError::Graph(GraphError::NodeOutOfRange {
            node: 3,
            node_count: 3
        })
    ));
}

#[test]
fn adjacency_reader_allows_empty_neighbour_lists() {
    let text = "0: 1\n1: 0\n2:\n";
    let graph = read_adjacency_list(Cursor::new(text)).expect("adjacency list must parse");
    assert_eq!(graph.neighbours(0), Some(&[1][..]));
    assert_eq!(graph.neighbours(2), Some(&[][..]));
    assert_eq!(graph.neighbours(3), None);
}

#[rstest]
#[case("0 1\n", "INPUT_MALFORMED_LINE")]
#[case("0: 1\n2: 0\n", "INPUT_UNEXPECTED_NODE")]
#[case("zero: 1\n", "INPUT_MALFORMED_LINE")]
#[case("0: 1\n1: 5\n", "GRAPH_NODE_OUT_OF_RANGE")]
fn adjacency_reader_rejects_bad_input(#[case] text: &str, #[case] code: &str) {
    let err = read_adjacency_list(Cursor::new(text)).expect_err("input must be rejected");
    assert_eq!(err.code(), code);
}

#[test]
fn count_renders_nodes_and_components() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_graph(&dir, "pairs.txt", "4\n0 1\n2 3\n");
    let report = run(Command::Count, &path, InputFormat::Edges);
    assert_eq!(report.graph, "pairs");
    assert_eq!(render(&report), "nodes: 4\ncomponents: 2\n");
}

#[test]
fn components_lists_every_node() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_graph(&dir, "blocks.txt", "0: 3\n1: 2\n2: 1\n3: 0\n4:\n");
    let report = run(Command::Components, &path, InputFormat::Adjacency);
    match &report.outcome {
        Outcome::Labels(labels) => {
            assert_eq!(labels.component_of(3), Some(ComponentId::new(0)));
        }
        other => panic!("expected labels, got {other:?}"),
    }
    assert_eq!(
        render(&report),
        "nodes: 5\ncomponents: 3\n0\t0\n1\t1\n2\t1\n3\t0\n4\t2\n"
    );
}

#[rstest]
#[case("1 1 0\n1 0 1\n0 1 0\n", "cycle: yes (0, 0)\n")]
#[case("0 1 0\n1 0 1\n0 1 0\n", "cycle: no\n")]
#[case("0 1 1\n1 0 1\n1 1 0\n", "cycle: yes (1, 2)\n")]
fn cycle_reports_the_closing_edge(#[case] matrix: &str, #[case] expected: &str) {
    let dir = TempDir::new().expect("tempdir");
    let path = write_graph(&dir, "matrix.txt", matrix);
    let report = run(Command::Cycle, &path, InputFormat::Matrix);
    assert_eq!(render(&report), expected);
}

#[test]
fn missing_files_surface_open_errors() {
    let dir = TempDir::new().expect("tempdir");
    let err = run_cli(Cli {
        command: Command::Count(GraphArgs {
            path: dir.path().join("absent.txt"),
            format: InputFormat::Edges,
        }),
    })
    .expect_err("missing file must fail");
    assert_eq!(err.code(), "INPUT_OPEN");
}

#[rstest]
#[case("graphs/social.edges", "social")]
#[case("matrix", "matrix")]
#[case("/", "graph")]
fn graph_names_come_from_the_file_stem(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(derive_graph_name(Path::new(path)), expected);
}
