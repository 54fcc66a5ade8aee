//! Generate random sequences for use in tests and data augmentation.

use rand::prelude::*;
use seqdata::{Alphabet, Index, Result, SeqError};

/// Checks that an alphabet size is usable and returns it as an exclusive
/// upper bound on symbol indices.
///
/// Sizes beyond the range of [`Index`] are capped to it.
pub(crate) fn symbol_bound(alphabet_size: usize) -> Result<Index> {
    if alphabet_size == 0 {
        Err(SeqError::EmptyAlphabet)
    } else {
        Ok(Index::try_from(alphabet_size).unwrap_or(Index::MAX))
    }
}

/// Draws sequences whose symbols are independent and uniformly distributed
/// over an alphabet.
///
/// The generator owns its random stream. Two generators built with the same
/// seed produce identical output for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct IndependentGenerator {
    /// Exclusive upper bound on the symbol indices.
    bound: Index,
    /// The random stream.
    rng: StdRng,
}

impl IndependentGenerator {
    /// Creates a generator for an alphabet of the given size.
    ///
    /// Without a `seed`, the random stream is seeded from entropy.
    ///
    /// # Errors
    ///
    /// * If `alphabet_size` is zero.
    pub fn new(alphabet_size: usize, seed: Option<u64>) -> Result<Self> {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::from_rng(alphabet_size, rng)
    }

    /// Creates a generator that draws from the given random stream.
    ///
    /// # Errors
    ///
    /// * If `alphabet_size` is zero.
    pub fn from_rng(alphabet_size: usize, rng: StdRng) -> Result<Self> {
        let bound = symbol_bound(alphabet_size)?;
        Ok(Self { bound, rng })
    }

    /// The number of symbols in the alphabet.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn alphabet_size(&self) -> usize {
        self.bound as usize
    }

    /// The random stream, e.g. for drawing mutations from the same source.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Generates a sequence of `length` symbol indices.
    pub fn generate(&mut self, length: usize) -> Vec<Index> {
        let bound = self.bound;
        (0..length).map(|_| self.rng.gen_range(0..bound)).collect()
    }

    /// Generates `cardinality` sequences, each of `length` symbol indices.
    pub fn generate_batch(&mut self, cardinality: usize, length: usize) -> Vec<Vec<Index>> {
        (0..cardinality).map(|_| self.generate(length)).collect()
    }
}

/// Generates random strings over a named alphabet.
///
/// # Arguments
///
/// * `cardinality`: number of strings to generate.
/// * `length`: length of every string.
/// * `alphabet`: the alphabet from which to draw characters.
/// * `seed`: for the random number generator.
///
/// # Errors
///
/// * If the alphabet is empty.
pub fn random_strings(cardinality: usize, length: usize, alphabet: &Alphabet, seed: u64) -> Result<Vec<String>> {
    let mut generator = IndependentGenerator::new(alphabet.size(), Some(seed))?;
    Ok(generator
        .generate_batch(cardinality, length)
        .iter()
        .map(|indices| alphabet.decode(indices))
        .collect())
}
