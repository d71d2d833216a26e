//! Random number generators.
//!
//! Sampling code takes its randomness through the [`UniformRng`] trait so
//! that tests can substitute a deterministic source.  The default production
//! generator wraps the `rand_mt` Mersenne Twister.

use mk_core::Real;
use rand_mt::Mt19937GenRand64;

/// A source of uniform deviates in `[0, 1)`.
///
/// Implementations must be deterministic given their seed; the trait object
/// is the only source of non-determinism in trajectory simulation.
pub trait UniformRng {
    /// Generate the next uniform deviate in `[0, 1)`.
    fn next_real(&mut self) -> Real;
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
        // Map u64 to [0.0, 1.0)
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}
