//! `Matrix` — a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` providing the dense
//! operations the chain engine needs: multiplication, integer matrix power,
//! row-vector products, and eigenvalue extraction.

use crate::array::Array;
use mk_core::Real;
use nalgebra::DMatrix;
use num_complex::Complex;
use std::ops::{Index, Mul};

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Extract a row as an `Array`.
    pub fn row(&self, i: usize) -> Array {
        let data: Vec<Real> = self.0.row(i).iter().copied().collect();
        Array::from_vec(data)
    }

    /// Row-vector product `vᵀ · M`, returned as an `Array`.
    ///
    /// This is the distribution-propagation step: a probability row vector
    /// times the transition matrix yields the next-step distribution.
    pub fn vec_mul(&self, v: &Array) -> Array {
        Array::from(self.0.tr_mul(v.inner()))
    }

    /// Integer matrix power by binary exponentiation.
    ///
    /// `power(0)` is the identity.  Only defined for square matrices.
    pub fn power(&self, mut n: usize) -> Self {
        debug_assert!(self.is_square());
        let mut result = Self::identity(self.0.nrows());
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Eigenvalues of a square matrix, sorted ascending by real part with
    /// ties broken by imaginary part.
    ///
    /// Computed via the real Schur decomposition; recomputed on every call.
    pub fn eigenvalues(&self) -> Vec<Complex<Real>> {
        let mut eigs: Vec<Complex<Real>> =
            self.0.complex_eigenvalues().iter().copied().collect();
        eigs.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
        eigs
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn power_zero_is_identity() {
        let m = Matrix::from_row_slice(2, 2, &[0.5, 0.5, 0.2, 0.8]);
        let p = m.power(0);
        assert_eq!(p, Matrix::identity(2));
    }

    #[test]
    fn power_matches_repeated_multiplication() {
        let m = Matrix::from_row_slice(2, 2, &[0.5, 0.5, 0.2, 0.8]);
        let p3 = m.power(3);
        let expected = &(&m * &m) * &m;
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(p3[(i, j)], expected[(i, j)], epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn vec_mul_propagates_distribution() {
        // two-state symmetric chain: any distribution maps to (0.5, 0.5)
        let m = Matrix::from_row_slice(2, 2, &[0.5, 0.5, 0.5, 0.5]);
        let v = Array::from_slice(&[0.9, 0.1]);
        let next = m.vec_mul(&v);
        assert_relative_eq!(next[0], 0.5, epsilon = 1e-15);
        assert_relative_eq!(next[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn stochastic_matrix_has_unit_eigenvalue() {
        let m = Matrix::from_row_slice(2, 2, &[0.9, 0.1, 0.4, 0.6]);
        let eigs = m.eigenvalues();
        // eigenvalues of this matrix are 0.5 and 1.0, sorted ascending
        assert_relative_eq!(eigs[0].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(eigs[1].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(eigs[0].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn eigenvalues_sorted_ascending() {
        let m = Matrix::from_row_slice(3, 3, &[
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0,
        ]);
        // cyclic permutation: eigenvalues are the cube roots of unity
        let eigs = m.eigenvalues();
        assert_eq!(eigs.len(), 3);
        for w in eigs.windows(2) {
            assert!(w[0].re <= w[1].re + 1e-12);
        }
        assert_relative_eq!(eigs[2].re, 1.0, epsilon = 1e-12);
    }
}
