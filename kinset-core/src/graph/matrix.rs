//! Square adjacency matrices.

use crate::error::GraphError;

use super::{Edge, Graph};

/// A validated `n x n` adjacency matrix stored row-major.
///
/// The matrix need not be symmetric: an entry in either direction connects
/// the two nodes.
///
/// # Examples
/// ```
/// use kinset_core::{AdjacencyMatrix, Graph};
///
/// let matrix = AdjacencyMatrix::try_from_rows(&[[0_u8, 1, 0], [0, 0, 0], [0, 0, 1]])?;
/// assert_eq!(matrix.node_count(), 3);
/// assert!(matrix.is_connected(1, 0));
/// assert_eq!(matrix.edges().count(), 2);
/// # Ok::<(), kinset_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from rows of `0`/`1` entries.
    ///
    /// # Errors
    /// Returns [`GraphError::NonSquareMatrix`] when a row length differs from
    /// the row count and [`GraphError::InvalidMatrixEntry`] for entries other
    /// than `0` or `1`.
    pub fn try_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GraphError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (row, raw) in rows.iter().enumerate() {
            let entries = raw.as_ref();
            check_row_len(row, entries.len(), size)?;
            for (column, &value) in entries.iter().enumerate() {
                cells.push(match value {
                    0 => false,
                    1 => true,
                    _ => return Err(GraphError::InvalidMatrixEntry { row, column, value }),
                });
            }
        }
        Ok(Self { size, cells })
    }

    /// Builds a matrix from rows of booleans.
    ///
    /// # Errors
    /// Returns [`GraphError::NonSquareMatrix`] when a row length differs from
    /// the row count.
    pub fn try_from_bool_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GraphError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (row, raw) in rows.iter().enumerate() {
            let flags = raw.as_ref();
            check_row_len(row, flags.len(), size)?;
            cells.extend_from_slice(flags);
        }
        Ok(Self { size, cells })
    }

    /// Returns the raw entry at `(row, column)`, or `false` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> bool {
        if row >= self.size || column >= self.size {
            return false;
        }
        self.cells
            .get(row * self.size + column)
            .copied()
            .unwrap_or(false)
    }

    /// Returns `true` when either `(a, b)` or `(b, a)` is set.
    #[must_use]
    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        self.get(a, b) || self.get(b, a)
    }

    /// Iterates over every set entry `(row, column)` exactly as stored,
    /// including both directions of a symmetric pair and the diagonal.
    pub fn entries(&self) -> impl Iterator<Item = Edge> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(move |(cell, _)| cell_edge(cell, size))
    }
}

impl Graph for AdjacencyMatrix {
    fn node_count(&self) -> usize {
        self.size
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.size).flat_map(move |row| {
            (row..self.size)
                .filter(move |&column| self.is_connected(row, column))
                .map(move |column| Edge::new(row, column))
        })
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "row-major cell offsets decompose into row and column"
)]
const fn cell_edge(cell: usize, size: usize) -> Edge {
    Edge::new(cell / size, cell % size)
}

const fn check_row_len(row: usize, columns: usize, rows: usize) -> Result<(), GraphError> {
    if columns == rows {
        Ok(())
    } else {
        Err(GraphError::NonSquareMatrix { row, columns, rows })
    }
}
