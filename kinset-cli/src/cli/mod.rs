//! Command-line interface for the kinset component tools.
//!
//! Each command loads one graph file in a chosen text layout and reports its
//! component count, per-node labels, or the first edge that closes a cycle.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, GraphArgs, Outcome, Report, render_report, run_cli,
};
pub use input::{
    InputError, InputFormat, LoadedGraph, MAX_NODE_COUNT, load_graph, read_adjacency_list, read_edge_list,
    read_matrix,
};

#[cfg(test)]
mod tests;
