//! Smoke-checking a dataset by batching it.

use std::path::Path;

use ndarray::Array2;
use seqdata::{
    io,
    loader::{get_dataloaders, RowDataset},
    Index, Splits,
};

/// Loads an index dataset and runs one shuffled pass of batches over every
/// split, logging the batch sizes. Returns the number of batches per split.
pub fn batches<P: AsRef<Path>>(
    inp_path: P,
    batch_size: usize,
    workers: usize,
    seed: Option<u64>,
) -> Result<Splits<usize>, String> {
    let splits: Splits<Array2<Index>> = io::load_dataset(inp_path).map_err(|e| e.to_string())?;
    let datasets = splits
        .iter()
        .map(|(name, data)| (name.clone(), RowDataset::from(data)))
        .collect::<Splits<_>>();

    let mut loaders = get_dataloaders(datasets, batch_size, workers, seed).map_err(|e| e.to_string())?;

    let mut counts = Splits::new();
    for (name, loader) in &mut loaders {
        let sizes = loader.epoch().map(|batch| batch.len()).collect::<Vec<_>>();
        ftlog::info!("Split {name}: {} batches with sizes {sizes:?}", sizes.len());
        counts.insert(name.clone(), sizes.len());
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use seqdata::{io, Index, Splits};
    use tempdir::TempDir;

    use super::batches;

    #[test]
    fn counts_batches() -> Result<(), String> {
        let tmp = TempDir::new("seqtools-batches").map_err(|e| e.to_string())?;
        let mut splits = Splits::new();
        splits.insert("train".to_string(), Array2::<Index>::zeros((10, 3)));
        splits.insert("val".to_string(), Array2::<Index>::zeros((2, 3)));
        let inp = io::save_dataset(&splits, tmp.path().join("idx.bin")).map_err(|e| e.to_string())?;

        let counts = batches(inp, 4, 2, Some(0))?;
        assert_eq!(counts["train"], 3);
        assert_eq!(counts["val"], 1);
        Ok(())
    }
}
