//! # ri-math
//!
//! The integration engine: [`BoundedFunction`] (a function restricted to a
//! closed interval, with grid and random sampling), uniform random number
//! generators, and three integrators – hit-or-miss Monte Carlo, the
//! trapezoid rule, and Simpson's rule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// A function paired with its interval of validity.
pub mod bounded_function;

/// Numerical integration.
pub mod integrals;

/// Uniform random number generators.
pub mod random_numbers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bounded_function::{BoundedFunction, RangeInBounds};
pub use integrals::{
    hit_or_miss, Integrator, MonteCarloIntegral, SimpsonIntegral, TrapezoidIntegral,
};
pub use random_numbers::{MersenneTwisterUniformRng, StdUniformRng, UniformRng};
