//! # markov
//!
//! A discrete-time, finite-state Markov chain engine.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `mk-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use markov::chain::{MarkovChain, TransitionTable};
//! use markov::math::MersenneTwisterUniformRng;
//!
//! let table = TransitionTable::from_rows([
//!     ("bull", vec![("bull", 0.9), ("bear", 0.1)]),
//!     ("bear", vec![("bull", 0.3), ("bear", 0.7)]),
//! ])
//! .unwrap();
//! let mut chain = MarkovChain::new(table).unwrap();
//! chain.set_initial_distribution([("bull", 1.0)]).unwrap();
//!
//! let mut rng = MersenneTwisterUniformRng::new(42);
//! chain.start(&mut rng).unwrap();
//! for _ in 0..10 {
//!     chain.step(&mut rng).unwrap();
//! }
//! assert_eq!(chain.steps(), Some(10));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use mk_core as core;

/// Matrices, eigenvalues, RNG, and cumulative sampling.
pub use mk_math as math;

/// The Markov chain engine: tables, classes, runtime.
pub use mk_chain as chain;
