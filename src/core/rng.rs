//! Deterministic, replayable randomness.
//!
//! The engine never owns a random generator. Every transition receives a
//! `&mut dyn RandomSource`, and each card draw consumes exactly one
//! `next_index` call. Recording those indices is enough to replay a playout.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8 generator, forkable for parallel rollouts
//! - [`RecordingRandom`]: wraps any source and records every index drawn
//! - [`ReplayRandom`]: replays a recorded index sequence
//!
//! ```
//! use duel_engine::core::{GameRng, RandomSource, RecordingRandom, ReplayRandom};
//!
//! let mut recording = RecordingRandom::new(GameRng::new(7));
//! let first = recording.next_index(10).unwrap();
//! let second = recording.next_index(4).unwrap();
//!
//! let mut replay = ReplayRandom::new(recording.into_record());
//! assert_eq!(replay.next_index(10).unwrap(), first);
//! assert_eq!(replay.next_index(4).unwrap(), second);
//! assert!(replay.next_index(4).is_err());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> Result<usize>;
}

/// Deterministic RNG with forking for rollout branches.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, so every
    /// rollout thread can own its generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
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

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        debug_assert!(bound > 0, "next_index requires a non-empty range");
        Ok(self.gen_range_usize(0..bound))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Wraps a source and records every index it hands out.
#[derive(Clone, Debug)]
pub struct RecordingRandom<R> {
    inner: R,
    record: Vec<usize>,
}

impl<R: RandomSource> RecordingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            record: Vec::new(),
        }
    }

    /// Indices drawn so far, in draw order.
    #[must_use]
    pub fn record(&self) -> &[usize] {
        &self.record
    }

    #[must_use]
    pub fn into_record(self) -> Vec<usize> {
        self.record
    }
}

impl<R: RandomSource> RandomSource for RecordingRandom<R> {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        let index = self.inner.next_index(bound)?;
        self.record.push(index);
        Ok(index)
    }
}

/// Replays a recorded index sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayRandom {
    draws: Vec<usize>,
    position: usize,
}

impl ReplayRandom {
    #[must_use]
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, position: 0 }
    }

    /// Number of recorded draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }
}

impl RandomSource for ReplayRandom {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        let index = *self
            .draws
            .get(self.position)
            .ok_or(EngineError::RandomExhausted { drawn: self.position })?;
        if index >= bound {
            return Err(EngineError::CorruptState("replayed index out of range"));
        }
        self.position += 1;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(source: &mut dyn RandomSource, count: usize) -> Vec<usize> {
        (0..count).map(|i| source.next_index(10 + i).unwrap()).collect()
    }

    #[test]
    fn test_seed_fixes_the_index_sequence() {
        let first = draws(&mut GameRng::new(42), 30);
        assert_eq!(draws(&mut GameRng::new(42), 30), first);
        assert_ne!(draws(&mut GameRng::new(43), 30), first);
    }

    #[test]
    fn test_forked_branches_replay_per_fork() {
        let mut left = GameRng::new(7);
        let mut right = GameRng::new(7);

        let mut left_branch = left.fork();
        let mut right_branch = right.fork();
        let branch = draws(&mut left_branch, 20);

        assert_eq!(draws(&mut right_branch, 20), branch);
        assert_ne!(draws(&mut left, 20), branch);
        // The second fork of a parent is a new branch.
        assert_ne!(draws(&mut left.fork(), 20), branch);
    }

    #[test]
    fn test_checkpoint_resumes_mid_sequence() {
        let mut rng = GameRng::new(11);
        draws(&mut rng, 50);

        let json = serde_json::to_string(&rng.state()).unwrap();
        let checkpoint: GameRngState = serde_json::from_str(&json).unwrap();
        let expected = draws(&mut rng, 10);

        assert_eq!(draws(&mut GameRng::from_state(&checkpoint), 10), expected);
    }

    #[test]
    fn test_recording_replays_through_the_trait() {
        let mut recording = RecordingRandom::new(GameRng::new(3));
        let played = draws(&mut recording, 12);

        let mut replay = ReplayRandom::new(recording.into_record());
        assert_eq!(draws(&mut replay, 12), played);
        assert_eq!(replay.remaining(), 0);
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = GameRng::new(9);
        for bound in 1..50 {
            assert!(rng.next_index(bound).unwrap() < bound);
        }
    }

    #[test]
    fn test_recording_matches_inner() {
        let mut plain = GameRng::new(5);
        let mut recording = RecordingRandom::new(GameRng::new(5));

        let a: Vec<_> = (1..20).map(|b| plain.next_index(b).unwrap()).collect();
        let b: Vec<_> = (1..20).map(|b| recording.next_index(b).unwrap()).collect();

        assert_eq!(a, b);
        assert_eq!(recording.record(), a.as_slice());
    }

    #[test]
    fn test_replay_exhaustion() {
        let mut replay = ReplayRandom::new(vec![2]);
        assert_eq!(replay.remaining(), 1);
        assert_eq!(replay.next_index(3).unwrap(), 2);
        assert_eq!(
            replay.next_index(3),
            Err(EngineError::RandomExhausted { drawn: 1 })
        );
    }

    #[test]
    fn test_replay_out_of_range() {
        let mut replay = ReplayRandom::new(vec![5]);
        assert!(matches!(replay.next_index(3), Err(EngineError::CorruptState(_))));
        // A failed draw does not consume the recorded value.
        assert_eq!(replay.remaining(), 1);
    }
}
