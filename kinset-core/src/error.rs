//! Error types for the kinset core library.
//!
//! Every variant carries a stable machine-readable code so the CLI and
//! downstream callers can report failures without matching on display text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
///
/// Indices are validated before any mutation, so a failed call leaves the
/// structure exactly as it was.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// An element index was outside `[0, len)`.
    #[error("index {index} is out of range for a disjoint set of {len} elements")]
    IndexOutOfRange {
        /// The offending element index.
        index: usize,
        /// Number of elements in the universe.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// An element index was outside `[0, len)`.
        IndexOutOfRange => IndexOutOfRange { .. } => "DSU_INDEX_OUT_OF_RANGE",
    }
}

/// An error produced while building a graph input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint or neighbour referenced a node outside `[0, node_count)`.
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An adjacency matrix row did not have one entry per row.
    #[error("matrix row {row} has {columns} entries but the matrix has {rows} rows")]
    NonSquareMatrix {
        /// Zero-based index of the ragged row.
        row: usize,
        /// Number of entries found in that row.
        columns: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },
    /// An adjacency matrix entry was neither `0` nor `1`.
    #[error("matrix entry ({row}, {column}) is {value}; expected 0 or 1")]
    InvalidMatrixEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The rejected value.
        value: u8,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint or neighbour referenced a node outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An adjacency matrix row did not have one entry per row.
        NonSquareMatrix => NonSquareMatrix { .. } => "GRAPH_NON_SQUARE_MATRIX",
        /// An adjacency matrix entry was neither `0` nor `1`.
        InvalidMatrixEntry => InvalidMatrixEntry { .. } => "GRAPH_INVALID_MATRIX_ENTRY",
    }
}
