//! Error types for markov-rs.
//!
//! All fallible operations in the workspace surface a single
//! `thiserror`-derived enum.  Failures are input-correctness failures raised
//! eagerly at construction or configuration time; a successfully built chain
//! never fails while stepping or answering analytic queries.

use thiserror::Error;

/// The top-level error type used throughout markov-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A probability distribution failed validation (e.g. a transition-table
    /// row or an initial distribution whose entries do not sum to 1).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation was requested on a chain that is missing required
    /// configuration (e.g. `start` with no initial distribution set).
    #[error("not configured: {0}")]
    Configuration(String),

    /// Structurally invalid input (empty table, unknown state, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout markov-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mk_core::ensure;
/// fn stochastic(sum: f64) -> mk_core::Result<()> {
///     ensure!((sum - 1.0).abs() <= 1e-9, "row sums to {sum}, expected 1");
///     Ok(())
/// }
/// assert!(stochastic(1.0).is_ok());
/// assert!(stochastic(0.9).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}
