//! The chain runtime.
//!
//! `MarkovChain` owns the validated table, the derived sparse matrix and
//! communication classes, one cumulative sampling table per state, the
//! replaceable initial distribution, and the mutable trajectory state
//! (current state, step counter, visit counts).  Structural data is fixed
//! at construction; only `set_initial_distribution`, `start`, and `step`
//! mutate anything.

use crate::classes::CommunicationClasses;
use crate::table::TransitionTable;
use mk_core::{
    ensure,
    errors::{Error, Result},
    Real, PROBABILITY_TOLERANCE,
};
use mk_math::{close, Array, CumulativeTable, SparseMatrix, UniformRng};
use num_complex::Complex;
use std::fmt::Debug;
use std::hash::Hash;

/// The configured initial distribution and its sampling table.
#[derive(Debug, Clone)]
struct InitialDistribution {
    probabilities: Array,
    cumulative: CumulativeTable<usize>,
}

/// Mutable trajectory state, present only after `start`.
#[derive(Debug, Clone)]
struct Runtime {
    current: usize,
    steps: u64,
    visits: Vec<u64>,
}

/// A discrete-time Markov chain over states of type `S`.
#[derive(Debug, Clone)]
pub struct MarkovChain<S> {
    table: TransitionTable<S>,
    matrix: SparseMatrix,
    classes: CommunicationClasses,
    // one sampling table per state, over its positive outgoing entries
    row_tables: Vec<CumulativeTable<usize>>,
    initial: Option<InitialDistribution>,
    runtime: Option<Runtime>,
}

impl<S: Eq + Hash + Clone + Debug> MarkovChain<S> {
    /// Build a chain from a validated transition table.
    ///
    /// Derives the sparse matrix, the communication-class partition, and
    /// the per-state cumulative sampling tables.  No initial distribution
    /// is configured yet.
    pub fn new(table: TransitionTable<S>) -> Result<Self> {
        let matrix = table.to_matrix()?;
        let classes = CommunicationClasses::analyze(&matrix);
        let row_tables = (0..table.len())
            .map(|i| CumulativeTable::from_weighted(table.row(i).iter().copied()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            table,
            matrix,
            classes,
            row_tables,
            initial: None,
            runtime: None,
        })
    }

    // ── Structural accessors ──────────────────────────────────────────────

    /// Number of states.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Return `true` if the chain has no states (never the case for a
    /// successfully constructed chain).
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The states in canonical enumeration order.
    pub fn states(&self) -> &[S] {
        self.table.states()
    }

    /// The underlying transition table.
    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// The sparse transition matrix over canonical indices.
    pub fn transition_matrix(&self) -> &SparseMatrix {
        &self.matrix
    }

    /// The communication-class partition over canonical indices.
    pub fn communication_classes(&self) -> &CommunicationClasses {
        &self.classes
    }

    /// The closed (absorbing) classes, as sets of states.
    pub fn closed_classes(&self) -> Vec<Vec<&S>> {
        self.resolve_classes(self.classes.closed())
    }

    /// The open classes, as sets of states.
    pub fn open_classes(&self) -> Vec<Vec<&S>> {
        self.resolve_classes(self.classes.open())
    }

    fn resolve_classes(&self, classes: &[Vec<usize>]) -> Vec<Vec<&S>> {
        classes
            .iter()
            .map(|c| c.iter().map(|&i| self.table.state(i)).collect())
            .collect()
    }

    // ── Initial distribution ──────────────────────────────────────────────

    /// Configure or replace the initial distribution.
    ///
    /// Resets any running trajectory: the chain returns to the unstarted
    /// state and must be `start`ed again.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a named state is unknown or listed
    ///   twice.
    /// - [`Error::Validation`] if the positive probabilities do not sum to
    ///   1 within tolerance.
    pub fn set_initial_distribution<I>(&mut self, distribution: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, Real)>,
    {
        let entries: Vec<(S, Real)> = distribution.into_iter().collect();
        let sum: Real = entries.iter().map(|&(_, p)| p).filter(|&p| p > 0.0).sum();
        ensure!(
            close(sum, 1.0, PROBABILITY_TOLERANCE),
            "initial distribution sums to {sum}, expected 1"
        );

        let mut probabilities = Array::zeros(self.table.len());
        let mut weighted = Vec::new();
        for (state, p) in &entries {
            let i = self.table.index_of(state).ok_or_else(|| {
                Error::InvalidArgument(format!("unknown state {state:?}"))
            })?;
            if *p <= 0.0 {
                continue;
            }
            if probabilities[i] > 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "state {state:?} listed twice in initial distribution"
                )));
            }
            probabilities[i] = *p;
            weighted.push((i, *p));
        }

        self.initial = Some(InitialDistribution {
            probabilities,
            cumulative: CumulativeTable::from_weighted(weighted)?,
        });
        self.runtime = None;
        Ok(())
    }

    /// The configured initial distribution over the canonical enumeration,
    /// if any.
    pub fn initial_distribution(&self) -> Option<&Array> {
        self.initial.as_ref().map(|init| &init.probabilities)
    }

    // ── Trajectory simulation ─────────────────────────────────────────────

    /// Start (or restart) a trajectory.
    ///
    /// Resets the step counter and all visit counts, samples the first
    /// occupied state from the initial distribution, and records its
    /// visit.  Returns the sampled state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no initial distribution has
    /// been configured.  No state is mutated on failure.
    pub fn start<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Result<&S> {
        let init = self.initial.as_ref().ok_or_else(|| {
            Error::Configuration("no initial distribution configured".into())
        })?;
        let first = *init.cumulative.sample(rng);
        let mut visits = vec![0; self.table.len()];
        visits[first] = 1;
        self.runtime = Some(Runtime {
            current: first,
            steps: 0,
            visits,
        });
        Ok(self.table.state(first))
    }

    /// Advance the trajectory by one step.
    ///
    /// Samples the next state from the current state's outgoing
    /// distribution, increments the step counter and the new state's visit
    /// count, and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the chain has not been started.
    pub fn step<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Result<&S> {
        let runtime = self
            .runtime
            .as_mut()
            .ok_or_else(|| Error::Configuration("chain has not been started".into()))?;
        let next = *self.row_tables[runtime.current].sample(rng);
        runtime.current = next;
        runtime.steps += 1;
        runtime.visits[next] += 1;
        Ok(self.table.state(next))
    }

    /// The currently occupied state, or `None` before the first `start`.
    pub fn current_state(&self) -> Option<&S> {
        self.runtime
            .as_ref()
            .map(|runtime| self.table.state(runtime.current))
    }

    /// Steps taken since the last `start`, or `None` before the first
    /// `start`.
    pub fn steps(&self) -> Option<u64> {
        self.runtime.as_ref().map(|runtime| runtime.steps)
    }

    /// Per-state visit counts over the canonical enumeration, or `None`
    /// before the first `start`.  The counts sum to `steps + 1`.
    pub fn visit_counts(&self) -> Option<&[u64]> {
        self.runtime.as_ref().map(|runtime| runtime.visits.as_slice())
    }

    /// Visit counts normalized by `steps + 1`: the empirical occupancy
    /// distribution of the running trajectory.
    pub fn visit_frequencies(&self) -> Option<Array> {
        self.runtime.as_ref().map(|runtime| {
            let total = (runtime.steps + 1) as Real;
            Array::from_vec(
                runtime.visits.iter().map(|&v| v as Real / total).collect(),
            )
        })
    }

    // ── Analytic queries ──────────────────────────────────────────────────

    /// The state-occupancy distribution after `n` steps: the initial
    /// distribution row vector times the `n`-th matrix power.
    ///
    /// Pure: does not touch the trajectory state.  `n = 0` returns the
    /// initial distribution exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no initial distribution has
    /// been configured.
    pub fn probability_at_step(&self, n: usize) -> Result<Array> {
        let init = self.initial.as_ref().ok_or_else(|| {
            Error::Configuration("no initial distribution configured".into())
        })?;
        if n == 0 {
            return Ok(init.probabilities.clone());
        }
        let dense = self.matrix.to_dense();
        Ok(dense.power(n).vec_mul(&init.probabilities))
    }

    /// Eigenvalues of the dense transition matrix, sorted ascending by
    /// real part (ties by imaginary part).
    ///
    /// The second-largest modulus governs mixing speed.  Recomputed on
    /// every call.
    pub fn eigenvalues(&self) -> Vec<Complex<Real>> {
        self.matrix.to_dense().eigenvalues()
    }
}
