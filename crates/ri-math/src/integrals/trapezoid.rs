//! Composite trapezoidal rule.

use ri_core::{
    errors::{Error, Result},
    Real, Size,
};

use super::Integrator;
use crate::bounded_function::BoundedFunction;

/// Composite trapezoidal rule on `segments` equal sub-intervals.
///
/// Sums `(f(x_i) + f(x_{i+1})) * Δx / 2` over every adjacent pair of the
/// `segments + 1` grid points. Exact for linear integrands; the error on a
/// smooth integrand shrinks as `1 / segments²`.
#[derive(Debug, Clone)]
pub struct TrapezoidIntegral {
    segments: Size,
}

impl TrapezoidIntegral {
    /// Create a new trapezoidal integrator.
    pub fn new(segments: Size) -> Self {
        Self { segments }
    }

    /// Number of sub-intervals.
    pub fn segments(&self) -> Size {
        self.segments
    }
}

impl Integrator for TrapezoidIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, bf: &BoundedFunction<F>) -> Result<Real> {
        if self.segments == 0 {
            return Err(Error::InvalidArgument(
                "TrapezoidIntegral: segments must be > 0".into(),
            ));
        }
        let xs = bf.range_in_bounds(self.segments)?;
        let dx = xs.step();

        let mut sum = 0.0;
        let mut f_left = bf.value(bf.lower_bound());
        for x in xs.skip(1) {
            let f_right = bf.value(x);
            sum += (f_left + f_right) * dx / 2.0;
            f_left = f_right;
        }
        Ok(sum)
    }
}
