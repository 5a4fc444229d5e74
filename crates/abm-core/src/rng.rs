//! Deterministic, seedable RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every consumer of randomness (a random scheduler, the world's behaviour
//! RNG) owns its own `SimRng`.  Nothing draws from a shared global stream, so
//! the sequence one consumer sees never depends on how often another one
//! drew.  Given the same seed, a `SimRng` yields the same sequence of values
//! and the same sequence of shuffles for the whole run.
//!
//! When no seed is supplied, [`SimRng::from_entropy`] draws one from the OS.
//! The drawn seed is kept and reported by [`SimRng::seed`] so that a
//! non-deterministic run can still be replayed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for deriving child seeds.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  If a host needs several
/// independent streams, derive them with [`child`](Self::child).
#[derive(Clone)]
pub struct SimRng {
    seed:  u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, inner: SmallRng::seed_from_u64(seed) }
    }

    /// Seed from OS entropy.  The chosen seed is retrievable via
    /// [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// `Some(seed)` → [`new`](Self::new); `None` → [`from_entropy`](Self::from_entropy).
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// The seed this generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child `SimRng` with a different seed offset, for
    /// giving each consumer its own stream from one root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.inner.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng::new(child_seed)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.inner
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.inner.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimRng").field("seed", &self.seed).finish_non_exhaustive()
    }
}
