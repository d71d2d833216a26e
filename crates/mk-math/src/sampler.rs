//! Cumulative-distribution tables with binary-search sampling.
//!
//! A discrete distribution is turned into a prefix-sum table once; each
//! draw is then a uniform deviate plus an O(log n) binary search for the
//! leftmost entry whose cumulative sum is at least the deviate.

use crate::random_numbers::UniformRng;
use mk_core::{
    errors::{Error, Result},
    Real,
};

/// A prefix-summed discrete distribution over items of type `T`.
///
/// Entries are stored as `(cumulative_sum, item)` pairs in ascending
/// cumulative order, where entry `k` holds the sum of the first `k + 1`
/// probabilities in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable<T> {
    entries: Vec<(Real, T)>,
}

impl<T> CumulativeTable<T> {
    /// Build a table from `(item, probability)` pairs in input order.
    ///
    /// Zero-probability items must already have been excluded by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the input is empty or contains
    /// a non-positive probability.
    pub fn from_weighted<I>(weighted: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, Real)>,
    {
        let mut entries = Vec::new();
        let mut cumulative = 0.0;
        for (item, p) in weighted {
            if p <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "cumulative table requires positive probabilities, got {p}"
                )));
            }
            cumulative += p;
            entries.push((cumulative, item));
        }
        if entries.is_empty() {
            return Err(Error::InvalidArgument(
                "cumulative table requires at least one entry".into(),
            ));
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the table has no entries (never the case for a
    /// successfully constructed table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The total probability mass (the last cumulative sum).
    pub fn total(&self) -> Real {
        self.entries[self.entries.len() - 1].0
    }

    /// The stored `(cumulative_sum, item)` entries.
    pub fn entries(&self) -> &[(Real, T)] {
        &self.entries
    }

    /// The item selected by a draw `u` in `[0, 1)`: the leftmost entry
    /// whose cumulative sum is `>= u`.
    ///
    /// Deterministic given `u`.  A draw past the last cumulative sum
    /// (possible when rounding leaves the total slightly below 1) selects
    /// the last entry.
    pub fn locate(&self, u: Real) -> &T {
        let idx = self.entries.partition_point(|(c, _)| *c < u);
        let idx = idx.min(self.entries.len() - 1);
        &self.entries[idx].1
    }

    /// Draw a uniform deviate from `rng` and return the selected item.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> &T {
        self.locate(rng.next_real())
    }
}
