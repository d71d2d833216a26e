//! # mk-chain
//!
//! A discrete-time, finite-state Markov chain engine.
//!
//! A chain is built from a validated transition table over opaque state
//! identifiers.  Construction derives a sparse transition matrix and the
//! partition of the state set into closed and open communication classes.
//! The chain then supports stochastic trajectory simulation (`start` /
//! `step`) through an injectable random source, analytic state-occupancy
//! queries via matrix powers, and eigen-spectrum inspection.
//!
//! ```
//! use mk_chain::{MarkovChain, TransitionTable};
//! use mk_math::MersenneTwisterUniformRng;
//!
//! let table = TransitionTable::from_rows([
//!     ("sunny", vec![("sunny", 0.8), ("rainy", 0.2)]),
//!     ("rainy", vec![("sunny", 0.4), ("rainy", 0.6)]),
//! ])
//! .unwrap();
//! let mut chain = MarkovChain::new(table).unwrap();
//! chain.set_initial_distribution([("sunny", 1.0)]).unwrap();
//!
//! let mut rng = MersenneTwisterUniformRng::new(42);
//! chain.start(&mut rng).unwrap();
//! chain.step(&mut rng).unwrap();
//! assert_eq!(chain.steps(), Some(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Communication-class analysis (SCCs and the closed/open partition).
pub mod classes;

/// The chain runtime: simulation, analytic queries, spectrum.
pub mod chain;

/// Validated transition tables and the canonical state enumeration.
pub mod table;

pub use chain::MarkovChain;
pub use classes::CommunicationClasses;
pub use table::TransitionTable;
