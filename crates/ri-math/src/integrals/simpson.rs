//! Composite Simpson's rule.

use ri_core::{
    errors::{Error, Result},
    Real, Size,
};

use super::Integrator;
use crate::bounded_function::BoundedFunction;

/// Composite Simpson's rule on `intervals` pairs of sub-intervals.
///
/// Uses `2 * intervals + 1` grid points with `Δx = (b - a) / (2 * intervals)`:
///
/// `S = Δx / 3 * [f(x₀) + 4 Σ f(x_odd) + 2 Σ f(x_even interior) + f(x₂ₙ)]`
///
/// Exact for polynomials of degree ≤ 3.
#[derive(Debug, Clone)]
pub struct SimpsonIntegral {
    intervals: Size,
}

impl SimpsonIntegral {
    /// Create a new Simpson integrator.
    pub fn new(intervals: Size) -> Self {
        Self { intervals }
    }

    /// Number of segment pairs.
    pub fn intervals(&self) -> Size {
        self.intervals
    }
}

impl Integrator for SimpsonIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, bf: &BoundedFunction<F>) -> Result<Real> {
        let n = self.intervals;
        if n == 0 {
            return Err(Error::InvalidArgument(
                "SimpsonIntegral: intervals must be > 0".into(),
            ));
        }
        let steps = n.checked_mul(2).ok_or_else(|| {
            Error::InvalidArgument(format!("SimpsonIntegral: intervals ({n}) too large"))
        })?;
        let grid = bf.range_in_bounds(steps)?;
        let dx = grid.step();
        let fx: Vec<Real> = grid.map(|x| bf.value(x)).collect();

        let sum_odd: Real = (1..=n).map(|i| fx[2 * i - 1]).sum();
        let sum_even: Real = (1..n).map(|i| fx[2 * i]).sum();

        Ok(dx * (fx[0] + 4.0 * sum_odd + 2.0 * sum_even + fx[steps]) / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn three_point_rule() {
        // ∫₋₁¹ x² dx = 2/3, exact with a single parabola.
        let bf = BoundedFunction::new(|x| x * x, -1.0, 1.0).unwrap();
        let result = SimpsonIntegral::new(1).integrate(&bf).unwrap();
        assert_abs_diff_eq!(result, 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_is_exact() {
        // ∫₀² (x³ + 2x² + 1) dx = 4 + 16/3 + 2
        let bf = BoundedFunction::new(|x| x * x * x + 2.0 * x * x + 1.0, 0.0, 2.0).unwrap();
        let result = SimpsonIntegral::new(3).integrate(&bf).unwrap();
        assert_abs_diff_eq!(result, 6.0 + 16.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn weights_split_odd_and_even() {
        // With f = 1 at a single interior odd/even node and 0 elsewhere the
        // weights 4 and 2 are visible directly.
        let dx = 0.25; // [0, 1], n = 2 → nodes 0, .25, .5, .75, 1
        let odd = BoundedFunction::new(|x: Real| if x == 0.25 { 1.0 } else { 0.0 }, 0.0, 1.0)
            .unwrap();
        let even = BoundedFunction::new(|x: Real| if x == 0.5 { 1.0 } else { 0.0 }, 0.0, 1.0)
            .unwrap();
        let simpson = SimpsonIntegral::new(2);
        assert_abs_diff_eq!(simpson.integrate(&odd).unwrap(), 4.0 * dx / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(simpson.integrate(&even).unwrap(), 2.0 * dx / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn sin_converges() {
        let bf = BoundedFunction::new(Real::sin, 0.0, std::f64::consts::PI).unwrap();
        let result = SimpsonIntegral::new(50).integrate(&bf).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_intervals_is_an_error() {
        let bf = BoundedFunction::new(|x| x, 0.0, 1.0).unwrap();
        assert!(matches!(
            SimpsonIntegral::new(0).integrate(&bf),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn overflowing_intervals_is_an_error() {
        let bf = BoundedFunction::new(|x| x, 0.0, 1.0).unwrap();
        for n in [Size::MAX / 2 + 1, Size::MAX / 2 + 2, Size::MAX] {
            assert!(matches!(
                SimpsonIntegral::new(n).integrate(&bf),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}
