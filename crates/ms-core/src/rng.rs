//! Seeded simulation RNG.
//!
//! A single `SimRng` lives on the tick thread and drives obstacle placement,
//! spawn positions and mission destinations.  Worker tasks never touch it,
//! so a fixed seed reproduces every random choice the simulation makes even
//! though search completion order is nondeterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Point, Size};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.  Not `Sync`; use [`child`](Self::child) to hand an
/// independent stream to another owner.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly distributed cell inside `bounds`.
    ///
    /// # Panics
    /// Panics if `bounds` is empty.
    pub fn random_point(&mut self, bounds: Size) -> Point {
        assert!(!bounds.is_empty(), "cannot sample a point inside empty bounds {bounds}");
        Point::new(
            self.0.gen_range(0..bounds.width),
            self.0.gen_range(0..bounds.height),
        )
    }
}
