//! Hit-or-miss Monte Carlo integration.
//!
//! Points are thrown uniformly into the rectangle
//! `[lower_bound, upper_bound) × [0, max_value)`; the fraction landing
//! below the curve, times the rectangle's area, estimates the integral.
//! The standard deviation of the estimate shrinks as `1 / √iterations`.
//!
//! `max_value` must bound the integrand from above on the whole interval.
//! This is not checked: a value below the true maximum clips every peak
//! above it and biases the estimate low.

use ri_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};

use super::Integrator;
use crate::bounded_function::BoundedFunction;
use crate::random_numbers::{MersenneTwisterUniformRng, StdUniformRng, UniformRng};

/// Estimate the integral of `bf` from `iterations` hit-or-miss trials
/// drawn from `rng`.
///
/// Always runs exactly `iterations` trials. Fails with
/// [`Error::InvalidArgument`] for zero iterations and
/// [`Error::Precondition`] unless `max_value` is finite and positive.
pub fn hit_or_miss<F, R>(
    bf: &BoundedFunction<F>,
    iterations: Size,
    max_value: Real,
    rng: &mut R,
) -> Result<Real>
where
    F: Fn(Real) -> Real,
    R: UniformRng + ?Sized,
{
    if iterations == 0 {
        return Err(Error::InvalidArgument(
            "hit_or_miss: iterations must be > 0".into(),
        ));
    }
    ensure!(
        max_value.is_finite() && max_value > 0.0,
        "max_value must be a finite positive bound, got {max_value}"
    );

    let mut hits: Size = 0;
    for _ in 0..iterations {
        let x = bf.random_x(rng);
        let y = rng.next_real() * max_value;
        if y < bf.value(x) {
            hits += 1;
        }
    }
    let area = bf.width() * max_value;
    Ok(hits as Real / iterations as Real * area)
}

/// Hit-or-miss Monte Carlo integrator.
///
/// With a seed, every call to [`integrate`](Integrator::integrate) replays
/// the same Mersenne Twister sequence and returns the same estimate.
/// Without one, each call draws a fresh generator from OS entropy.
#[derive(Debug, Clone)]
pub struct MonteCarloIntegral {
    iterations: Size,
    max_value: Real,
    seed: Option<u64>,
}

impl MonteCarloIntegral {
    /// Create an unseeded integrator.
    ///
    /// `max_value` is the height of the sampling rectangle and must be at
    /// least the maximum of the integrand on its interval.
    pub fn new(iterations: Size, max_value: Real) -> Self {
        Self {
            iterations,
            max_value,
            seed: None,
        }
    }

    /// Fix the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of trials per estimate.
    pub fn iterations(&self) -> Size {
        self.iterations
    }

    /// Height of the sampling rectangle.
    pub fn max_value(&self) -> Real {
        self.max_value
    }

    /// Generator seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Integrator for MonteCarloIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, bf: &BoundedFunction<F>) -> Result<Real> {
        match self.seed {
            Some(seed) => {
                let mut rng = MersenneTwisterUniformRng::new(seed);
                hit_or_miss(bf, self.iterations, self.max_value, &mut rng)
            }
            None => {
                let mut rng = StdUniformRng::from_entropy();
                hit_or_miss(bf, self.iterations, self.max_value, &mut rng)
            }
        }
    }
}
