//! `Array` — a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>` used for probability
//! distributions over the canonical state enumeration.

use mk_core::Real;
use nalgebra::DVector;
use std::ops::{Index, IndexMut, Sub};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Sum of absolute values (L1 norm).
    pub fn l1_norm(&self) -> Real {
        self.0.iter().map(|x| x.abs()).sum()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Consume and return the inner `DVector`.
    pub fn into_inner(self) -> DVector<Real> {
        self.0
    }
}

impl From<DVector<Real>> for Array {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Array> for DVector<Real> {
    fn from(a: Array) -> Self {
        a.0
    }
}

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

impl Sub for &Array {
    type Output = Array;
    fn sub(self, rhs: &Array) -> Array {
        Array(&self.0 - &rhs.0)
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_indexing() {
        let a = Array::from_slice(&[0.2, 0.3, 0.5]);
        assert_eq!(a.size(), 3);
        assert_eq!(a[1], 0.3);
        assert!((a.sum() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn l1_distance_between_distributions() {
        let a = Array::from_slice(&[0.5, 0.5]);
        let b = Array::from_slice(&[0.25, 0.75]);
        assert!(((&a - &b).l1_norm() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn display() {
        let a = Array::from_slice(&[1.0, 0.5]);
        assert_eq!(a.to_string(), "[1, 0.5]");
    }
}
