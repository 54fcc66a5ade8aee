//! Tests for the shuffling batch loaders.

use ndarray::array;
use rand::prelude::*;
use test_case::test_case;

use seqdata::loader::{get_dataloaders, BatchLoader, RowDataset, SequenceDataset};
use seqdata::{SeqError, Splits};

#[test_case(10, 3, 0 ; "10 by 3 serial")]
#[test_case(10, 5, 0 ; "10 by 5 serial")]
#[test_case(10, 20, 2 ; "10 by 20 parallel")]
#[test_case(100, 7, 4 ; "100 by 7 parallel")]
#[test_case(0, 4, 1 ; "empty")]
fn one_pass_covers_every_item(cardinality: usize, batch_size: usize, workers: usize) {
    let data = (0..cardinality).collect::<Vec<_>>();
    let mut loader = BatchLoader::<usize, _>::new(data, batch_size, workers, StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(loader.num_batches(), cardinality.div_ceil(batch_size));

    let batches = loader.epoch().collect::<Vec<_>>();
    assert_eq!(batches.len(), cardinality.div_ceil(batch_size));
    for (i, batch) in batches.iter().enumerate() {
        if i + 1 < batches.len() {
            assert_eq!(batch.len(), batch_size, "batch {i} is short");
        } else {
            assert!(!batch.is_empty() && batch.len() <= batch_size);
        }
    }

    let mut seen = batches.into_iter().flatten().collect::<Vec<_>>();
    seen.sort_unstable();
    assert_eq!(seen, (0..cardinality).collect::<Vec<_>>());
}

#[test]
fn every_pass_is_reshuffled() {
    let data = (0..1000).collect::<Vec<_>>();
    let mut loader = BatchLoader::<i32, _>::new(data, 1000, 0, StdRng::seed_from_u64(7)).unwrap();
    let first = loader.epoch().next().unwrap();
    let second = loader.epoch().next().unwrap();
    assert_ne!(first, second);
    assert_ne!(first, (0..1000).collect::<Vec<_>>());
}

#[test]
fn same_seed_same_batches() {
    let make = || BatchLoader::<i32, _>::new((0..50).collect::<Vec<_>>(), 8, 2, StdRng::seed_from_u64(3)).unwrap();
    let (mut a, mut b) = (make(), make());
    for _ in 0..3 {
        assert_eq!(a.epoch().collect::<Vec<_>>(), b.epoch().collect::<Vec<_>>());
    }
}

#[test]
fn zero_batch_size() {
    let result = BatchLoader::<i32, _>::new(vec![1, 2, 3], 0, 0, StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(SeqError::InvalidBatchSize)));
}

#[test]
fn loaders_per_split() {
    let train = array![[0, 1, 2], [1, 2, 3], [2, 3, -1], [3, -1, -1]];
    let test = array![[0, 0, 0]];

    let mut splits = Splits::new();
    splits.insert("train".to_string(), RowDataset::from(&train));
    splits.insert("test".to_string(), RowDataset::from(&test));

    let mut loaders = get_dataloaders(splits, 3, 1, Some(42)).unwrap();
    assert_eq!(loaders.len(), 2);

    let train_loader = loaders.get_mut("train").unwrap();
    assert_eq!(train_loader.data().cardinality(), 4);
    assert_eq!(train_loader.batch_size(), 3);
    assert_eq!(train_loader.workers(), 1);

    let batches = train_loader.epoch().collect::<Vec<_>>();
    assert_eq!(batches.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 1]);
    let mut rows = batches.into_iter().flatten().collect::<Vec<_>>();
    rows.sort_unstable();
    assert_eq!(
        rows,
        vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, -1], vec![3, -1, -1]]
    );

    let test_batches = loaders.get_mut("test").unwrap().epoch().collect::<Vec<_>>();
    assert_eq!(test_batches, vec![vec![vec![0, 0, 0]]]);
}

#[test]
fn zero_batch_size_fails_for_any_split() {
    let mut splits = Splits::new();
    splits.insert("train".to_string(), vec![1, 2, 3]);
    assert!(get_dataloaders::<i32, _>(splits, 0, 0, None).is_err());
}
