//! # mk-core
//!
//! Core type aliases and error definitions shared across the markov-rs
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` convenience macro.
pub mod errors;

pub use errors::{Error, Result};

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// Default tolerance for probability-sum checks.
pub const PROBABILITY_TOLERANCE: Real = 1e-9;
