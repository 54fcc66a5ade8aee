//! Encoding text files of sequences as index datasets.

use std::path::{Path, PathBuf};

use seqdata::{encoding, io, Alphabet, Splits};

use crate::utils;

/// Reads one sequence per line from `inp_path`, encodes them as a
/// sentinel-padded index matrix and saves it under the given split name.
pub fn encode<P: AsRef<Path>>(
    inp_path: P,
    alphabet: &Alphabet,
    length: Option<usize>,
    split: &str,
    out_path: P,
) -> Result<PathBuf, String> {
    let sequences = utils::read_sequences(&inp_path)?;
    ftlog::info!(
        "Read {} sequences from {:?}",
        sequences.len(),
        inp_path.as_ref()
    );

    let data = encoding::strs_to_index_matrix(&sequences, length, alphabet);
    let unknown = data.iter().filter(|&&i| i == seqdata::SENTINEL).count();
    ftlog::info!(
        "Encoded with {} into shape {:?}; {unknown} positions hold no symbol",
        alphabet.name(),
        data.shape()
    );

    let mut splits = Splits::new();
    splits.insert(split.to_string(), data);
    io::save_dataset(&splits, out_path).map_err(|e| e.to_string())
}
