//! A real function restricted to a closed interval.
//!
//! [`BoundedFunction`] bundles an integrand with `[lower_bound,
//! upper_bound]` and provides the sampling primitives every integrator
//! needs: an evenly spaced grid ([`RangeInBounds`]), a coarse maximum
//! estimate, and uniform random abscissae.
//!
//! The integrand is assumed continuous and non-negative on the interval.
//! That assumption is not checked.

use std::iter::FusedIterator;

use ri_core::{
    errors::{Error, Result},
    Real, Size,
};

use crate::random_numbers::UniformRng;

/// A function `f` together with the closed interval on which it is
/// integrated.
///
/// The bounds are validated once at construction and never change.
#[derive(Clone, Copy)]
pub struct BoundedFunction<F> {
    f: F,
    lower_bound: Real,
    upper_bound: Real,
}

impl<F> std::fmt::Debug for BoundedFunction<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedFunction")
            .field("lower_bound", &self.lower_bound)
            .field("upper_bound", &self.upper_bound)
            .finish_non_exhaustive()
    }
}

impl<F: Fn(Real) -> Real> BoundedFunction<F> {
    /// Pair `f` with `[lower_bound, upper_bound]`.
    ///
    /// Fails with [`Error::InvalidInterval`] unless both bounds are finite
    /// and `lower_bound < upper_bound`.
    pub fn new(f: F, lower_bound: Real, upper_bound: Real) -> Result<Self> {
        if !(lower_bound.is_finite() && upper_bound.is_finite() && lower_bound < upper_bound) {
            return Err(Error::InvalidInterval {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        Ok(Self {
            f,
            lower_bound,
            upper_bound,
        })
    }

    /// Lower end of the interval.
    pub fn lower_bound(&self) -> Real {
        self.lower_bound
    }

    /// Upper end of the interval.
    pub fn upper_bound(&self) -> Real {
        self.upper_bound
    }

    /// `upper_bound - lower_bound`; always positive.
    pub fn width(&self) -> Real {
        self.upper_bound - self.lower_bound
    }

    /// Evaluate the wrapped function at `x`.
    #[inline]
    pub fn value(&self, x: Real) -> Real {
        (self.f)(x)
    }

    /// The `num_steps + 1` evenly spaced points from `lower_bound` to
    /// `upper_bound` inclusive.
    ///
    /// Each call returns a fresh iterator; the returned iterator is also
    /// `Clone`, so the same grid can be walked any number of times.
    pub fn range_in_bounds(&self, num_steps: Size) -> Result<RangeInBounds> {
        if num_steps == 0 {
            return Err(Error::InvalidArgument(
                "range_in_bounds: num_steps must be > 0".into(),
            ));
        }
        let back = num_steps.checked_add(1).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "range_in_bounds: num_steps ({num_steps}) too large for a grid"
            ))
        })?;
        Ok(RangeInBounds {
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            num_steps,
            front: 0,
            back,
        })
    }

    /// Largest value of `f` over the `num_steps + 1` grid points, floored
    /// at `0.0`.
    ///
    /// This is a lower bound on the true maximum: a peak between grid
    /// points is missed. Callers using the result as the height of a
    /// rejection-sampling rectangle should pad it. A function negative on
    /// the whole grid yields `0.0`.
    pub fn estimate_max(&self, num_steps: Size) -> Result<Real> {
        let mut max = 0.0;
        for x in self.range_in_bounds(num_steps)? {
            let y = self.value(x);
            if y > max {
                max = y;
            }
        }
        Ok(max)
    }

    /// One abscissa drawn uniformly from `[lower_bound, upper_bound)`.
    pub fn random_x<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        self.lower_bound + rng.next_real() * self.width()
    }
}

/// Lazy, evenly spaced grid over an interval.
///
/// Produced by [`BoundedFunction::range_in_bounds`]. The first point is
/// exactly the lower bound and the last is exactly the upper bound.
#[derive(Debug, Clone)]
pub struct RangeInBounds {
    lower_bound: Real,
    upper_bound: Real,
    num_steps: Size,
    front: Size,
    back: Size,
}

impl RangeInBounds {
    /// Distance between consecutive points.
    pub fn step(&self) -> Real {
        (self.upper_bound - self.lower_bound) / self.num_steps as Real
    }

    fn point(&self, i: Size) -> Real {
        if i == self.num_steps {
            self.upper_bound
        } else {
            self.lower_bound + i as Real * (self.upper_bound - self.lower_bound) / self.num_steps as Real
        }
    }
}

impl Iterator for RangeInBounds {
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        if self.front >= self.back {
            return None;
        }
        let x = self.point(self.front);
        self.front += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for RangeInBounds {
    fn next_back(&mut self) -> Option<Real> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for RangeInBounds {}

impl FusedIterator for RangeInBounds {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_numbers::MersenneTwisterUniformRng;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_empty_and_reversed_intervals() {
        assert_eq!(
            BoundedFunction::new(|x| x, 1.0, 1.0).unwrap_err(),
            Error::InvalidInterval {
                lower: 1.0,
                upper: 1.0
            }
        );
        assert!(BoundedFunction::new(|x| x, 2.0, 1.0).is_err());
        assert!(BoundedFunction::new(|x| x, 0.0, Real::INFINITY).is_err());
        assert!(BoundedFunction::new(|x| x, Real::NAN, 1.0).is_err());
    }

    #[test]
    fn grid_endpoints_are_exact() {
        let bf = BoundedFunction::new(|x| x, 0.1, 0.7).unwrap();
        let xs: Vec<Real> = bf.range_in_bounds(3).unwrap().collect();
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[3], 0.7);
        assert_abs_diff_eq!(xs[1], 0.3, epsilon = 1e-15);
        assert_abs_diff_eq!(xs[2], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn grid_is_restartable() {
        let bf = BoundedFunction::new(|x| x * x, -1.0, 1.0).unwrap();
        let grid = bf.range_in_bounds(10).unwrap();
        let first: Vec<Real> = grid.clone().collect();
        let second: Vec<Real> = grid.collect();
        let third: Vec<Real> = bf.range_in_bounds(10).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn grid_reversed_matches_forward() {
        let bf = BoundedFunction::new(|x| x, 0.0, 2.0).unwrap();
        let grid = bf.range_in_bounds(8).unwrap();
        assert_eq!(grid.len(), 9);
        let mut forward: Vec<Real> = grid.clone().collect();
        let backward: Vec<Real> = grid.rev().collect();
        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_steps_is_an_error() {
        let bf = BoundedFunction::new(|x| x, 0.0, 1.0).unwrap();
        assert!(matches!(
            bf.range_in_bounds(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(bf.estimate_max(0).is_err());
    }

    #[test]
    fn overflowing_step_count_is_an_error() {
        let bf = BoundedFunction::new(|x| x, 0.0, 1.0).unwrap();
        assert!(matches!(
            bf.range_in_bounds(Size::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert!(bf.range_in_bounds(Size::MAX - 1).is_ok());
    }

    #[test]
    fn estimate_max_hits_grid_peak() {
        let bf = BoundedFunction::new(Real::sin, 0.0, std::f64::consts::PI).unwrap();
        assert_abs_diff_eq!(bf.estimate_max(2).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn estimate_max_is_a_lower_bound() {
        // True maximum 1.0 at x = 0.3, between grid points 0, 0.5, 1.
        let bf = BoundedFunction::new(|x| 1.0 - (x - 0.3) * (x - 0.3), 0.0, 1.0).unwrap();
        let est = bf.estimate_max(2).unwrap();
        assert_abs_diff_eq!(est, 0.96, epsilon = 1e-12);
        assert!(est < 1.0);
    }

    #[test]
    fn estimate_max_floors_at_zero() {
        let bf = BoundedFunction::new(|x| -1.0 - x * x, -1.0, 1.0).unwrap();
        assert_eq!(bf.estimate_max(16).unwrap(), 0.0);
    }

    #[test]
    fn random_x_stays_in_half_open_interval() {
        let bf = BoundedFunction::new(|x| x, -3.0, 5.0).unwrap();
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..10_000 {
            let x = bf.random_x(&mut rng);
            assert!((-3.0..5.0).contains(&x), "{x} outside [-3, 5)");
        }
    }
}
