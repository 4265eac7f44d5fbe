//! Deterministic random number generation for card dealing and ball draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical cards and call order
//! - **Forkable**: Derive an independent stream per player card
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Separate sequences for dealing and calling
//!
//! ## Usage
//!
//! ```
//! use myngo::core::GameRng;
//!
//! let room = GameRng::new(42);
//!
//! // Dealing and calling never share a stream
//! let mut deal = room.for_context("deal");
//! let mut calls = room.for_context("calls");
//!
//! let column = deal.sample_distinct(1..=15, 5);
//! assert_eq!(column.len(), 5);
//!
//! let pool = [3u8, 9, 27];
//! assert!(calls.choose(&pool).is_some());
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Deterministic RNG backed by ChaCha8.
///
/// Every random decision in the crate takes a `&mut GameRng`, so tests can
/// seed it and production callers can use [`GameRng::from_entropy`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so a game can be replayed from
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, e.g. one
    /// per player joining the room.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `count` distinct values from `range` without replacement,
    /// sorted ascending.
    ///
    /// If the range holds fewer than `count` values, every value in the
    /// range is returned instead; callers that need an exact count must
    /// check the length.
    pub fn sample_distinct(&mut self, range: RangeInclusive<u8>, count: usize) -> Vec<u8> {
        let (lo, hi) = (*range.start(), *range.end());
        if hi < lo {
            return Vec::new();
        }

        let span = usize::from(hi - lo) + 1;
        let amount = count.min(span);

        let mut values: Vec<u8> = rand::seq::index::sample(&mut self.inner, span, amount)
            .into_iter()
            // offset < span <= 256 and lo + offset <= hi, so this stays in u8
            .map(|offset| lo + offset as u8)
            .collect();
        values.sort_unstable();
        values
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing a room mid-game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten balls, as a card column or a run of calls would draw them.
    fn draw(rng: &mut GameRng) -> Vec<u8> {
        rng.sample_distinct(1..=75, 10)
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(draw(&mut rng1), draw(&mut rng2));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(draw(&mut rng), draw(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut deal = rng.for_context("deal");
        let mut calls = rng.for_context("calls");

        assert_ne!(draw(&mut deal), draw(&mut calls));
    }

    #[test]
    fn test_sample_distinct_sorted_and_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..50 {
            let values = rng.sample_distinct(16..=30, 5);
            assert_eq!(values.len(), 5);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().all(|v| (16..=30).contains(v)));
        }
    }

    #[test]
    fn test_sample_distinct_short_range() {
        let mut rng = GameRng::new(7);

        // Asking for more values than exist returns the whole range
        assert_eq!(rng.sample_distinct(1..=3, 5), vec![1, 2, 3]);

        // Inverted range yields nothing
        #[allow(clippy::reversed_empty_ranges)]
        let empty = rng.sample_distinct(10..=1, 2);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sample_distinct_full_u8_range() {
        let mut rng = GameRng::new(7);
        let values = rng.sample_distinct(250..=255, 6);
        assert_eq!(values, vec![250, 251, 252, 253, 254, 255]);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_roundtrip_resumes_sequence() {
        let mut rng = GameRng::new(42);
        for _ in 0..5 {
            draw(&mut rng);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..5).map(|_| draw(&mut rng)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..5).map(|_| draw(&mut restored)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let replay = GameRng::new(rng.seed());
        assert_eq!(rng.state(), replay.state());
    }
}
