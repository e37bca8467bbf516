//! Uniform random number generators.
//!
//! The engine never touches a process-wide generator: every sampling
//! routine takes a [`UniformRng`] argument. Two implementations are
//! provided, a Mersenne Twister (via `rand_mt`) and a wrapper around any
//! `rand` generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_mt::Mt19937GenRand64;
use ri_core::Real;

/// A source of uniform deviates on `[0, 1)`.
pub trait UniformRng {
    /// Generate the next uniform deviate in `[0, 1)`.
    fn next_real(&mut self) -> Real;
}

impl<T: UniformRng + ?Sized> UniformRng for &mut T {
    fn next_real(&mut self) -> Real {
        (**self).next_real()
    }
}

impl<T: UniformRng + ?Sized> UniformRng for Box<T> {
    fn next_real(&mut self) -> Real {
        (**self).next_real()
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformRng for MersenneTwisterUniformRng {
    fn next_real(&mut self) -> Real {
        // Top 53 bits: exactly representable, strictly below 1.0.
        let u = self.rng.next_u64() >> 11;
        u as Real * (1.0 / (1u64 << 53) as Real)
    }
}

/// Adapter exposing any [`rand::Rng`] as a [`UniformRng`].
pub struct StdUniformRng<R = StdRng> {
    rng: R,
}

impl<R: Rng> StdUniformRng<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl StdUniformRng<StdRng> {
    /// A `StdRng`-backed generator with a fixed seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A `StdRng`-backed generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformRng for StdUniformRng<R> {
    fn next_real(&mut self) -> Real {
        self.rng.gen::<Real>()
    }
}
