//! Shuffling batch loaders over indexed datasets.

use core::marker::PhantomData;

use ndarray::Array2;
use rand::prelude::*;
use rayon::prelude::*;

use crate::{Result, SeqError, Splits};

/// A collection whose items can be fetched by index.
///
/// This is all a [`BatchLoader`] needs from a dataset. We provide a blanket
/// implementation for any type that implements `AsRef<[I]>`, so `Vec<I>` and
/// slices can be used directly.
pub trait SequenceDataset<I> {
    /// Returns a reference to an indexed item.
    ///
    /// The implementor may choose to panic if the index is out of bounds.
    fn get(&self, index: usize) -> &I;

    /// Returns the number of items in the dataset.
    fn cardinality(&self) -> usize;

    /// Whether the dataset has no items.
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
}

impl<I, T: AsRef<[I]>> SequenceDataset<I> for T {
    fn get(&self, index: usize) -> &I {
        &self.as_ref()[index]
    }

    fn cardinality(&self) -> usize {
        self.as_ref().len()
    }
}

/// The rows of a matrix, as a dataset of sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDataset<T> {
    /// One sequence per row of the matrix.
    rows: Vec<Vec<T>>,
}

impl<T: Clone> From<&Array2<T>> for RowDataset<T> {
    fn from(matrix: &Array2<T>) -> Self {
        let rows = matrix.rows().into_iter().map(|r| r.to_vec()).collect();
        Self { rows }
    }
}

impl<T> AsRef<[Vec<T>]> for RowDataset<T> {
    fn as_ref(&self) -> &[Vec<T>] {
        &self.rows
    }
}

/// Yields the items of a dataset in shuffled batches.
///
/// Each call to [`epoch`](Self::epoch) draws a fresh permutation from the
/// loader's own random stream, so two loaders built with the same seed yield
/// the same batches in the same order.
pub struct BatchLoader<I, D> {
    /// The dataset to draw items from.
    data: D,
    /// The maximum number of items in a batch.
    batch_size: usize,
    /// The number of threads used to gather a batch. Zero gathers on the
    /// calling thread.
    workers: usize,
    /// The worker threads, if any.
    pool: Option<rayon::ThreadPool>,
    /// The source of shuffles.
    rng: StdRng,
    /// The item type.
    _i: PhantomData<I>,
}

impl<I, D: SequenceDataset<I>> BatchLoader<I, D> {
    /// Creates a new loader.
    ///
    /// # Arguments
    ///
    /// * `data`: The dataset to batch.
    /// * `batch_size`: The maximum number of items in a batch.
    /// * `workers`: The number of threads used to gather each batch.
    /// * `rng`: The random stream used for shuffling.
    ///
    /// # Errors
    ///
    /// * If `batch_size` is zero.
    /// * If the worker threads cannot be started.
    pub fn new(data: D, batch_size: usize, workers: usize, rng: StdRng) -> Result<Self> {
        if batch_size == 0 {
            return Err(SeqError::InvalidBatchSize);
        }
        let pool = if workers > 0 {
            Some(rayon::ThreadPoolBuilder::new().num_threads(workers).build()?)
        } else {
            None
        };
        Ok(Self {
            data,
            batch_size,
            workers,
            pool,
            rng,
            _i: PhantomData,
        })
    }

    /// The dataset being batched.
    pub const fn data(&self) -> &D {
        &self.data
    }

    /// The maximum number of items in a batch.
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The number of threads used to gather a batch.
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// The number of batches in one pass over the dataset.
    pub fn num_batches(&self) -> usize {
        self.data.cardinality().div_ceil(self.batch_size)
    }

    /// Shuffles the dataset and returns an iterator over one pass of it.
    ///
    /// Every batch holds `batch_size` items except possibly the last.
    pub fn epoch(&mut self) -> Batches<'_, I, D> {
        let mut order = (0..self.data.cardinality()).collect::<Vec<_>>();
        order.shuffle(&mut self.rng);
        Batches {
            loader: self,
            order,
            start: 0,
        }
    }
}

impl<I, D> BatchLoader<I, D>
where
    I: Clone + Send + Sync,
    D: SequenceDataset<I> + Sync,
{
    /// Clones the items at the given indices, on the worker threads if there
    /// are any.
    fn gather(&self, indices: &[usize]) -> Vec<I> {
        self.pool.as_ref().map_or_else(
            || indices.iter().map(|&i| self.data.get(i).clone()).collect(),
            |pool| pool.install(|| indices.par_iter().map(|&i| self.data.get(i).clone()).collect()),
        )
    }
}

/// One shuffled pass over the dataset of a [`BatchLoader`].
pub struct Batches<'a, I, D> {
    /// The loader being iterated.
    loader: &'a BatchLoader<I, D>,
    /// The shuffled indices of this pass.
    order: Vec<usize>,
    /// Where in `order` the next batch starts.
    start: usize,
}

impl<I, D> Iterator for Batches<'_, I, D>
where
    I: Clone + Send + Sync,
    D: SequenceDataset<I> + Sync,
{
    type Item = Vec<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.order.len() {
            return None;
        }
        let end = (self.start + self.loader.batch_size).min(self.order.len());
        let batch = self.loader.gather(&self.order[self.start..end]);
        self.start = end;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.order.len() - self.start).div_ceil(self.loader.batch_size);
        (remaining, Some(remaining))
    }
}

impl<I, D> ExactSizeIterator for Batches<'_, I, D>
where
    I: Clone + Send + Sync,
    D: SequenceDataset<I> + Sync,
{
}

/// Builds one shuffling loader per split.
///
/// Each loader owns an independent random stream. With a `seed`, the stream
/// of the `i`-th split (in name order) is seeded with `seed + i`; without one,
/// every stream is seeded from entropy.
///
/// # Errors
///
/// * See [`BatchLoader::new`].
pub fn get_dataloaders<I, D: SequenceDataset<I>>(
    datasets: Splits<D>,
    batch_size: usize,
    workers: usize,
    seed: Option<u64>,
) -> Result<Splits<BatchLoader<I, D>>> {
    datasets
        .into_iter()
        .zip(0_u64..)
        .map(|((name, data), i)| {
            let rng = seed.map_or_else(StdRng::from_entropy, |s| StdRng::seed_from_u64(s.wrapping_add(i)));
            ftlog::debug!(
                "Loader for split {name}: {} items, batch size {batch_size}, {workers} workers",
                data.cardinality()
            );
            BatchLoader::new(data, batch_size, workers, rng).map(|loader| (name, loader))
        })
        .collect()
}
