use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};

/// Source of levels for newly inserted nodes.
///
/// A node with level `L` is linked into levels `0..=L`. Implement this trait
/// to control the shape of a [`SkipList`](crate::SkipList), e.g. to make
/// tests deterministic.
pub trait LevelGenerator {
  /// Returns the level for the next node.
  fn random_level(&mut self) -> usize;
}

/// The default [`LevelGenerator`]: flips a fair coin and raises the level
/// until the first tail.
///
/// `P(level = k) = 2^-(k + 1)`, so the expected level is 1. The draw is
/// unbounded, use [`Options::with_max_level`](crate::Options::with_max_level)
/// to cap it.
#[derive(Debug, Clone)]
pub struct CoinFlip<R = SmallRng> {
  rng: R,
}

impl<R> CoinFlip<R> {
  /// Creates a generator flipping coins with the given random number generator.
  #[inline]
  pub const fn new(rng: R) -> Self {
    Self { rng }
  }
}

impl CoinFlip {
  /// Creates a generator seeded from the operating system.
  #[inline]
  pub fn from_os_rng() -> Self {
    Self::new(SmallRng::from_os_rng())
  }

  /// Creates a deterministic generator from a seed.
  #[inline]
  pub fn seed_from_u64(seed: u64) -> Self {
    Self::new(SmallRng::seed_from_u64(seed))
  }
}

impl Default for CoinFlip {
  #[inline]
  fn default() -> Self {
    Self::from_os_rng()
  }
}

impl<R: RngCore> LevelGenerator for CoinFlip<R> {
  #[inline]
  fn random_level(&mut self) -> usize {
    let mut level = 0;
    while self.rng.random_bool(0.5) {
      level += 1;
    }
    level
  }
}
