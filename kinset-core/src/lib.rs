//! kinset core library.
//!
//! A union-find ([`DisjointSet`]) with iterative path compression and union
//! by rank, plus the connected-component queries built on it: counting,
//! labelling and undirected cycle detection over adjacency matrices, edge
//! lists and adjacency lists.
//!
//! # Instrumentation
//!
//! The graph-level entry points open `debug` spans named after the function
//! and record a `nodes` field, then emit one `debug` event with the edge and
//! component totals. [`DisjointSet`] itself is not instrumented.

mod components;
mod disjoint_set;
mod error;
mod graph;
mod labels;

pub use crate::{
    components::{
        count_components, count_components_in_adjacency_list, count_components_in_edges,
        count_components_in_matrix, find_cycle_edge, has_cycle, label_components,
    },
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode},
    graph::{AdjacencyList, AdjacencyMatrix, Edge, EdgeList, Graph},
    labels::{ComponentId, ComponentLabels},
};
