//! Compressed sparse row matrix.
//!
//! The transition matrix of a finite-state chain is typically sparse: most
//! state pairs have zero transition probability and are simply omitted.
//! `SparseMatrix` stores only the nonzero entries in CSR form (`row_ptr`,
//! `col_indices`, `values`) and supports row iteration and densification.

use crate::matrix::Matrix;
use mk_core::{
    errors::{Error, Result},
    Real,
};

/// A sparse matrix in compressed sparse row format.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<Real>,
}

impl SparseMatrix {
    /// Build a `rows × cols` matrix from `(row, col, value)` triplets.
    ///
    /// Triplet order within a row is preserved.  Duplicate positions are
    /// kept as distinct entries; callers that need uniqueness must
    /// deduplicate beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any triplet index is out of
    /// range.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, Real)],
    ) -> Result<Self> {
        for &(i, j, _) in triplets {
            if i >= rows || j >= cols {
                return Err(Error::InvalidArgument(format!(
                    "triplet position ({i}, {j}) out of range for {rows}×{cols} matrix"
                )));
            }
        }

        // counting sort by row
        let mut counts = vec![0usize; rows + 1];
        for &(i, _, _) in triplets {
            counts[i + 1] += 1;
        }
        for i in 0..rows {
            counts[i + 1] += counts[i];
        }
        let row_ptr = counts.clone();

        let mut col_indices = vec![0usize; triplets.len()];
        let mut values = vec![0.0; triplets.len()];
        let mut next = counts;
        for &(i, j, v) in triplets {
            let slot = next[i];
            col_indices[slot] = j;
            values[slot] = v;
            next[i] += 1;
        }

        Ok(Self {
            rows,
            cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (nonzero) entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Iterate over the stored `(column, value)` entries of row `i`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, Real)> + '_ {
        let range = self.row_ptr[i]..self.row_ptr[i + 1];
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Sum of the stored entries of row `i`.
    pub fn row_sum(&self, i: usize) -> Real {
        self.row(i).map(|(_, v)| v).sum()
    }

    /// The value at `(i, j)`, zero if not stored.
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.row(i)
            .filter(|&(c, _)| c == j)
            .map(|(_, v)| v)
            .sum()
    }

    /// Convert to a dense [`Matrix`].
    pub fn to_dense(&self) -> Matrix {
        let mut m = nalgebra::DMatrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for (j, v) in self.row(i) {
                m[(i, j)] += v;
            }
        }
        Matrix::from(m)
    }
}
