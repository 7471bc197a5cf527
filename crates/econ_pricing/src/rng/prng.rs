//! Pseudo-random number generator handle for economy simulations.
//!
//! This module provides [`EconRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with batch operations. Each
//! simulation run owns exactly one handle; handles are never shared between
//! concurrent runs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Seeded random number generator handle.
///
/// Provides seeded, reproducible standard normal variates, drawn singly or
/// in the consumption/risky pairs the shock samplers consume.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::rng::EconRng;
///
/// let mut rng = EconRng::from_seed(42);
///
/// let n: f64 = rng.gen_normal();
/// let [z1, z2] = rng.gen_normal_pair();
/// assert!(n.is_finite() && z1.is_finite() && z2.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct EconRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl EconRng {
    /// Creates a new handle initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use econ_pricing::rng::EconRng;
    ///
    /// let mut rng1 = EconRng::from_seed(12345);
    /// let mut rng2 = EconRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Generates a pair of independent standard normal variates.
    ///
    /// The first element is always drawn before the second, so the stream
    /// consumption order is fixed for a given seed.
    #[inline]
    pub fn gen_normal_pair(&mut self) -> [f64; 2] {
        let z1 = self.gen_normal();
        let z2 = self.gen_normal();
        [z1, z2]
    }
}
