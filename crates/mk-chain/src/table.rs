//! Validated transition tables and the canonical state enumeration.
//!
//! States are opaque hashable identifiers.  The enumeration assigns each
//! state an integer index in first-seen order of the supplied rows; that
//! index is the canonical mapping used by the transition matrix and every
//! per-state array.

use mk_core::{
    ensure,
    errors::{Error, Result},
    Real, PROBABILITY_TOLERANCE,
};
use mk_math::{close, SparseMatrix};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A validated, immutable transition table over states of type `S`.
///
/// Every source state's outgoing probabilities sum to 1 within tolerance;
/// non-positive entries are dropped (zero-probability transitions may be
/// omitted entirely).  Every target state must itself have a row, so that
/// the derived matrix is row-stochastic.
#[derive(Debug, Clone)]
pub struct TransitionTable<S> {
    states: Vec<S>,
    index: HashMap<S, usize>,
    // per source index: (target index, probability > 0) in input order
    rows: Vec<Vec<(usize, Real)>>,
}

impl<S: Eq + Hash + Clone + Debug> TransitionTable<S> {
    /// Build a table from `(source, outgoing distribution)` rows.
    ///
    /// Row order fixes the canonical state enumeration.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if a row's positive probabilities do not sum
    ///   to 1 within tolerance.
    /// - [`Error::InvalidArgument`] if the table is empty, a source state
    ///   appears twice, a row lists the same target twice, or a target has
    ///   no row of its own.
    pub fn from_rows<I, J>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, J)>,
        J: IntoIterator<Item = (S, Real)>,
    {
        let raw: Vec<(S, Vec<(S, Real)>)> = rows
            .into_iter()
            .map(|(s, targets)| (s, targets.into_iter().collect()))
            .collect();
        if raw.is_empty() {
            return Err(Error::InvalidArgument(
                "transition table must contain at least one state".into(),
            ));
        }

        let mut states = Vec::with_capacity(raw.len());
        let mut index = HashMap::with_capacity(raw.len());
        for (source, _) in &raw {
            if index.insert(source.clone(), states.len()).is_some() {
                return Err(Error::InvalidArgument(format!(
                    "duplicate source state {source:?}"
                )));
            }
            states.push(source.clone());
        }

        let mut rows = Vec::with_capacity(raw.len());
        for (source, targets) in &raw {
            let sum: Real = targets.iter().map(|&(_, p)| p).filter(|&p| p > 0.0).sum();
            ensure!(
                close(sum, 1.0, PROBABILITY_TOLERANCE),
                "outgoing probabilities of state {source:?} sum to {sum}, expected 1"
            );
            let mut row = Vec::with_capacity(targets.len());
            let mut seen = vec![false; states.len()];
            for (target, p) in targets {
                if *p <= 0.0 {
                    continue;
                }
                let j = *index.get(target).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "target state {target:?} has no outgoing distribution"
                    ))
                })?;
                if seen[j] {
                    return Err(Error::InvalidArgument(format!(
                        "duplicate target state {target:?} in row of {source:?}"
                    )));
                }
                seen[j] = true;
                row.push((j, *p));
            }
            rows.push(row);
        }

        Ok(Self {
            states,
            index,
            rows,
        })
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Return `true` if the table has no states (never the case for a
    /// successfully constructed table).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The states in canonical enumeration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The canonical index of `state`, if present.
    pub fn index_of(&self, state: &S) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// The state at canonical index `i`.
    pub fn state(&self, i: usize) -> &S {
        &self.states[i]
    }

    /// The outgoing `(target index, probability)` entries of the state at
    /// index `i`, in input order.
    pub fn row(&self, i: usize) -> &[(usize, Real)] {
        &self.rows[i]
    }

    /// Build the sparse transition matrix: one entry per positive
    /// `(source, target, probability)` triple at the canonical indices.
    pub fn to_matrix(&self) -> Result<SparseMatrix> {
        let n = self.states.len();
        let triplets: Vec<(usize, usize, Real)> = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&(j, p)| (i, j, p)))
            .collect();
        SparseMatrix::from_triplets(n, n, &triplets)
    }
}
