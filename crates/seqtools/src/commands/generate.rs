//! Generating synthetic datasets.

use std::path::{Path, PathBuf};

use ndarray::Array2;
use rand::prelude::*;
use seqdata::{io, Alphabet, Index, Splits};
use seqgen::{augmentation::mutate_batch, random_data::IndependentGenerator};

/// Generates `num` random sequences, augments each with `copies` k-mutated
/// variants, shuffles them and saves them as train/val/test splits.
///
/// The validation and test splits get the given fractions of all sequences,
/// rounded down, and the train split gets the rest.
#[allow(clippy::too_many_arguments)]
pub fn generate<P: AsRef<Path>>(
    alphabet: &Alphabet,
    num: usize,
    length: usize,
    k: usize,
    copies: usize,
    (val_fraction, test_fraction): (f64, f64),
    out_path: P,
    seed: Option<u64>,
) -> Result<PathBuf, String> {
    if !(0.0..=1.0).contains(&val_fraction)
        || !(0.0..=1.0).contains(&test_fraction)
        || val_fraction + test_fraction > 1.0
    {
        return Err(format!(
            "Invalid split fractions: val {val_fraction}, test {test_fraction}"
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    ftlog::info!(
        "Generating {num} sequences of length {length} over {} with seed {seed}",
        alphabet.name()
    );

    let mut generator = IndependentGenerator::new(alphabet.size(), Some(seed)).map_err(|e| e.to_string())?;
    let seeds = generator.generate_batch(num, length);
    let mut sequences =
        mutate_batch(&seeds, copies, k, alphabet.size(), seed.wrapping_add(1)).map_err(|e| e.to_string())?;
    sequences.shuffle(generator.rng_mut());
    ftlog::info!("Generated {} sequences in total", sequences.len());

    let splits = split(sequences, length, val_fraction, test_fraction)?;
    for (name, data) in &splits {
        ftlog::info!("Split {name}: {} sequences", data.nrows());
    }

    io::save_dataset(&splits, out_path).map_err(|e| e.to_string())
}

/// Divides the sequences into train/val/test matrices.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn split(
    mut sequences: Vec<Vec<Index>>,
    length: usize,
    val_fraction: f64,
    test_fraction: f64,
) -> Result<Splits<Array2<Index>>, String> {
    let total = sequences.len() as f64;
    let num_val = (total * val_fraction).floor() as usize;
    let num_test = (total * test_fraction).floor() as usize;

    let test = sequences.split_off(sequences.len() - num_test);
    let val = sequences.split_off(sequences.len() - num_val);

    [("train", sequences), ("val", val), ("test", test)]
        .into_iter()
        .map(|(name, rows)| {
            let n = rows.len();
            let flat = rows.into_iter().flatten().collect::<Vec<_>>();
            Array2::from_shape_vec((n, length), flat)
                .map(|data| (name.to_string(), data))
                .map_err(|e| e.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use seqdata::{alphabet::DNA, io::load_dataset, Splits};
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn generates_splits() -> Result<(), String> {
        let tmp = TempDir::new("seqtools-generate").map_err(|e| e.to_string())?;
        let path = generate(&DNA, 10, 12, 2, 1, (0.2, 0.1), tmp.path().join("out").join("data.bin"), Some(1))?;

        let splits: Splits<Array2<Index>> = load_dataset(&path).map_err(|e| e.to_string())?;
        assert_eq!(splits["train"].dim(), (14, 12));
        assert_eq!(splits["val"].dim(), (4, 12));
        assert_eq!(splits["test"].dim(), (2, 12));
        assert!(splits.values().all(|x| x.iter().all(|&i| (0..4).contains(&i))));
        Ok(())
    }

    #[test]
    fn rejects_bad_fractions() {
        assert!(generate(&DNA, 10, 12, 2, 1, (0.7, 0.7), "unused.bin", Some(1)).is_err());
        assert!(generate(&DNA, 10, 12, 2, 1, (-0.1, 0.0), "unused.bin", Some(1)).is_err());
    }
}
