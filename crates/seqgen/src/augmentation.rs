//! Augment a set of sequences with k-mutated variants of each.

use rand::prelude::*;
use rayon::prelude::*;
use seqdata::{Index, Result};

use crate::random_edits::k_mutations;

/// Generates an augmented set of sequences by adding `copies` k-mutated
/// variants of every seed sequence.
///
/// The output holds, for each seed sequence in order, the seed itself
/// followed by its variants. The variants of the `i`-th seed sequence are
/// drawn from a random stream seeded with `seed + i`, so the output depends
/// only on the arguments and not on how the work is scheduled.
///
/// # Arguments:
///
/// * `seeds`: the sequences to mutate.
/// * `copies`: the number of variants to make per seed sequence.
/// * `k`: the edit budget of each variant.
/// * `alphabet_size`: the number of symbols to draw new symbols from.
/// * `seed`: for the random number generators.
///
/// # Errors
///
/// * See [`k_mutations`].
pub fn mutate_batch(
    seeds: &[Vec<Index>],
    copies: usize,
    k: usize,
    alphabet_size: usize,
    seed: u64,
) -> Result<Vec<Vec<Index>>> {
    let groups = seeds
        .par_iter()
        .enumerate()
        .map(|(i, sequence)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            core::iter::once(Ok(sequence.clone()))
                .chain((0..copies).map(|_| k_mutations(sequence, k, alphabet_size, &mut rng)))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    ftlog::debug!(
        "Augmented {} sequences with {copies} variants each at budget {k}",
        seeds.len()
    );

    Ok(groups.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::mutate_batch;
    use crate::random_data::IndependentGenerator;

    #[test]
    fn tiny() {
        let data = vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0], vec![1, 1, 1, 1]];

        let augmented = mutate_batch(&data, 3, 2, 4, 42).unwrap();
        assert_eq!(12, augmented.len());
        for (i, original) in data.iter().enumerate() {
            assert_eq!(&augmented[i * 4], original);
        }
        assert!(augmented.iter().all(|s| s.len() == 4));
    }

    #[test]
    fn big() {
        let data = IndependentGenerator::new(20, Some(42)).unwrap().generate_batch(1000, 50);

        let augmented = mutate_batch(&data, 10, 5, 20, 7).unwrap();
        assert_eq!(11_000, augmented.len());
        assert_eq!(augmented, mutate_batch(&data, 10, 5, 20, 7).unwrap());
    }

    #[test]
    fn empty_sequences_fail() {
        assert!(mutate_batch(&[vec![]], 2, 1, 4, 0).is_err());
        assert_eq!(mutate_batch(&[vec![]], 2, 0, 4, 0).unwrap(), vec![Vec::<i32>::new(); 3]);
    }
}
