//! Converting index datasets to one-hot tensors.

use std::path::{Path, PathBuf};

use ndarray::Array2;
use seqdata::{encoding, io, Alphabet, Index, Splits};

/// Loads an index dataset, converts every split to one-hot tensors and saves
/// the result.
pub fn one_hot<P: AsRef<Path>>(inp_path: P, alphabet: &Alphabet, out_path: P) -> Result<PathBuf, String> {
    let splits: Splits<Array2<Index>> = io::load_dataset(inp_path).map_err(|e| e.to_string())?;
    let one_hot = encoding::dataset_to_one_hot(&splits, alphabet.size()).map_err(|e| e.to_string())?;
    for (name, data) in &one_hot {
        ftlog::info!("Split {name}: one-hot shape {:?}", data.shape());
    }
    io::save_dataset(&one_hot, out_path).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array3};
    use seqdata::{alphabet::DNA, io, Splits};
    use tempdir::TempDir;

    use super::one_hot;

    #[test]
    fn converts_every_split() -> Result<(), String> {
        let tmp = TempDir::new("seqtools-one-hot").map_err(|e| e.to_string())?;
        let mut splits = Splits::new();
        splits.insert("train".to_string(), array![[0, -1], [3, 2]]);
        splits.insert("val".to_string(), array![[1, 1]]);
        let inp = io::save_dataset(&splits, tmp.path().join("idx.bin")).map_err(|e| e.to_string())?;

        let out = one_hot(inp, &DNA, tmp.path().join("one_hot.bin"))?;
        let converted: Splits<Array3<f32>> = io::load_dataset(out).map_err(|e| e.to_string())?;
        assert_eq!(converted["train"].dim(), (2, 2, 4));
        assert_eq!(converted["train"].sum(), 3.0);
        assert_eq!(converted["val"].sum(), 2.0);
        Ok(())
    }

    #[test]
    fn invalid_index_is_reported() -> Result<(), String> {
        let tmp = TempDir::new("seqtools-one-hot").map_err(|e| e.to_string())?;
        let mut splits = Splits::new();
        splits.insert("train".to_string(), array![[0, 7]]);
        let inp = io::save_dataset(&splits, tmp.path().join("idx.bin")).map_err(|e| e.to_string())?;

        let err = one_hot(inp, &DNA, tmp.path().join("one_hot.bin")).unwrap_err();
        assert!(err.contains("train") && err.contains("invalid index 7"), "{err}");
        Ok(())
    }
}
