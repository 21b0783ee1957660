//! Seeded randomness and unbiased shuffling

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random source for card generation
///
/// Seeded sources repeat the same card sets run after run; unseeded ones
/// draw their seed from the operating system.
#[derive(Debug, Clone)]
pub struct CardRng {
    rng: StdRng,
}

impl CardRng {
    /// Deterministic source for reproducible card sets
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform index in `0..=upper`
    pub fn index_up_to(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }

    /// Lowercase alphanumeric token of the given length
    pub fn token(&mut self, length: usize) -> String {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        (0..length)
            .map(|_| {
                let idx = self.rng.random_range(0..ALPHABET.len());
                ALPHABET.get(idx).copied().map_or('0', char::from)
            })
            .collect()
    }
}

/// Shuffle a slice in place with Fisher–Yates
///
/// Walks from the last index down, swapping each position with a uniformly
/// chosen index at or before it, so every permutation is equally likely.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut CardRng) {
    for i in (1..items.len()).rev() {
        let j = rng.index_up_to(i);
        items.swap(i, j);
    }
}

/// Shuffled copy of a pool; the input is left untouched
pub fn shuffled<T: Clone>(pool: &[T], rng: &mut CardRng) -> Vec<T> {
    let mut copy = pool.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}
