//! Numerical integration of a [`BoundedFunction`].
//!
//! Provides hit-or-miss Monte Carlo, the composite trapezoid rule, and the
//! composite Simpson rule. None of them adapts its step size or reports an
//! error bound: each runs a fixed number of evaluations and returns a
//! single estimate.

/// Hit-or-miss Monte Carlo.
pub mod monte_carlo;
/// Composite Simpson's rule.
pub mod simpson;
/// Composite trapezoidal rule.
pub mod trapezoid;

use ri_core::{errors::Result, Real};

use crate::bounded_function::BoundedFunction;

pub use monte_carlo::{hit_or_miss, MonteCarloIntegral};
pub use simpson::SimpsonIntegral;
pub use trapezoid::TrapezoidIntegral;

/// A numerical integrator over a bounded function.
pub trait Integrator {
    /// Estimate the integral of `bf` over its interval.
    fn integrate<F: Fn(Real) -> Real>(&self, bf: &BoundedFunction<F>) -> Result<Real>;
}
