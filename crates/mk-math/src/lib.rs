//! # mk-math
//!
//! Numeric substrate for markov-rs: dense matrix/array newtypes (over
//! nalgebra), a compressed sparse row matrix, eigenvalue extraction,
//! floating-point comparison helpers, random number generation, and
//! cumulative-distribution sampling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D array newtype over `nalgebra::DVector`.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Dense 2D matrix newtype over `nalgebra::DMatrix`.
pub mod matrix;

/// Random number generators behind the injectable [`UniformRng`] trait.
pub mod random_numbers;

/// Cumulative-distribution tables with binary-search sampling.
pub mod sampler;

/// Compressed sparse row matrix.
pub mod sparse;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::close;
pub use matrix::Matrix;
pub use random_numbers::{MersenneTwisterUniformRng, UniformRng};
pub use sampler::CumulativeTable;
pub use sparse::SparseMatrix;
