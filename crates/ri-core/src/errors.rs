//! Error types for random-integration.
//!
//! Every rejected input surfaces as a variant of a single
//! `thiserror`-derived enum. Inputs that are accepted but numerically
//! unsound (e.g. a `max_value` that does not bound the integrand) are not
//! detected and produce no error.

use thiserror::Error;

/// The top-level error type used throughout random-integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument, e.g. a zero step, segment or iteration count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The interval is empty, reversed, or has a non-finite bound.
    #[error("invalid interval [{lower}, {upper}]: lower bound must be finite and below the upper bound")]
    InvalidInterval {
        /// The requested lower bound.
        lower: f64,
        /// The requested upper bound.
        upper: f64,
    },
}

/// Shorthand `Result` type used throughout random-integration.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ri_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ri_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
