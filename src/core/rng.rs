//! Seedable random number generation for secret selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Serializable**: O(1) state capture and restore
//! - **Inclusive ranges**: Secrets are drawn from `[minimum, maximum]`
//!
//! ## Usage
//!
//! ```
//! use draw_number::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let secret = rng.gen_range_inclusive(1..=10);
//! assert!((1..=10).contains(&secret));
//!
//! // Same seed, same secret
//! let mut again = GameRng::new(42);
//! assert_eq!(again.gen_range_inclusive(1..=10), secret);
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to draw secrets.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The seed is still recorded so a session can be replayed with `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw an integer uniformly from an inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many secrets have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(
                rng1.gen_range_inclusive(0..=1000),
                rng2.gen_range_inclusive(0..=1000)
            );
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = GameRng::new(7);
        let draws: Vec<_> = (0..500).map(|_| rng.gen_range_inclusive(1..=3)).collect();

        assert!(draws.iter().all(|d| (1..=3).contains(d)));
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_negative_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let n = rng.gen_range_inclusive(-5..=-1);
            assert!((-5..=-1).contains(&n));
        }
    }

    #[test]
    fn test_entropy_records_seed() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());

        assert_eq!(
            rng.gen_range_inclusive(0..=1_000_000),
            replay.gen_range_inclusive(0..=1_000_000)
        );
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_inclusive(0..=1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_inclusive(0..=1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_inclusive(0..=1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
