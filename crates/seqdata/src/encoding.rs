//! Conversions from strings to index sequences and from index sequences to
//! one-hot tensors.
//!
//! Positions without a symbol carry the [`SENTINEL`](crate::SENTINEL). In a
//! one-hot tensor they become all-zero rows, so every row sums to 1 for a
//! symbol and to 0 for the sentinel.

use ndarray::{prelude::*, Data, RemoveAxis};

use crate::{Alphabet, Index, Result, SeqError, Splits, SENTINEL};

/// Converts a string to a sequence of alphabet indices.
///
/// The result has exactly `length` items, or one item per character of `s`
/// if `length` is `None`. Characters outside the alphabet and positions past
/// the end of `s` become the sentinel, so this never fails.
///
/// # Arguments
///
/// * `s`: The string to convert.
/// * `length`: The length of the output, padding or truncating as needed.
/// * `alphabet`: The alphabet to look symbols up in.
#[must_use]
pub fn str_seq_to_num_seq(s: &str, length: Option<usize>, alphabet: &Alphabet) -> Vec<Index> {
    let length = length.unwrap_or_else(|| s.chars().count());
    s.chars()
        .map(|c| alphabet.index_of(c).unwrap_or(SENTINEL))
        .chain(core::iter::repeat(SENTINEL))
        .take(length)
        .collect()
}

/// Converts a batch of strings to a matrix of alphabet indices, one row per
/// string.
///
/// If `length` is `None`, the rows are as long as the longest string. Shorter
/// rows are padded with the sentinel.
#[must_use]
pub fn strs_to_index_matrix<S: AsRef<str>>(strings: &[S], length: Option<usize>, alphabet: &Alphabet) -> Array2<Index> {
    let length = length.unwrap_or_else(|| {
        strings
            .iter()
            .map(|s| s.as_ref().chars().count())
            .max()
            .unwrap_or_default()
    });
    let rows = strings
        .iter()
        .map(|s| str_seq_to_num_seq(s.as_ref(), Some(length), alphabet))
        .collect::<Vec<_>>();
    Array2::from_shape_fn((rows.len(), length), |(r, c)| rows[r][c])
}

/// The lookup table behind the one-hot encoding.
///
/// It has shape `(alphabet_size + 1, alphabet_size)`. The first
/// `alphabet_size` rows are the identity matrix and the last row, which
/// stands for the sentinel, is all zeros.
#[must_use]
pub fn one_hot_table(alphabet_size: usize) -> Array2<f32> {
    let mut table = Array2::zeros((alphabet_size + 1, alphabet_size));
    table
        .slice_mut(s![..alphabet_size, ..])
        .assign(&Array2::eye(alphabet_size));
    table
}

/// Converts an array of indices to one-hot vectors.
///
/// The output has the shape of `x` with a trailing axis of length
/// `alphabet_size` appended. Valid indices become the matching unit vector and
/// the sentinel becomes the zero vector.
///
/// # Errors
///
/// * If `alphabet_size` is zero.
/// * If any entry of `x` is neither the sentinel nor in `[0, alphabet_size)`.
///   The error names the first such entry in row-major order.
pub fn index_to_one_hot<S, D>(x: &ArrayBase<S, D>, alphabet_size: usize) -> Result<Array<f32, D::Larger>>
where
    S: Data<Elem = Index>,
    D: Dimension,
{
    if alphabet_size == 0 {
        return Err(SeqError::EmptyAlphabet);
    }

    let mut data = vec![0.0; x.len() * alphabet_size];
    for (position, &index) in x.iter().enumerate() {
        if index == SENTINEL {
            continue;
        }
        match usize::try_from(index) {
            Ok(i) if i < alphabet_size => data[position * alphabet_size + i] = 1.0,
            _ => {
                return Err(SeqError::InvalidIndex {
                    index,
                    position,
                    alphabet_size,
                })
            }
        }
    }

    let mut shape = x.shape().to_vec();
    shape.push(alphabet_size);
    let one_hot = ArrayD::from_shape_vec(shape, data)?;
    Ok(one_hot.into_dimensionality::<D::Larger>()?)
}

/// Converts one-hot vectors along the last axis back to indices.
///
/// An all-zero vector becomes the sentinel. Any other vector becomes the
/// position of its largest entry, ties going to the first.
///
/// # Errors
///
/// * If `x` has no axes.
pub fn one_hot_to_index<S, D>(x: &ArrayBase<S, D>) -> Result<Array<Index, D::Smaller>>
where
    S: Data<Elem = f32>,
    D: RemoveAxis,
{
    if x.ndim() == 0 {
        return Err(ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
    }
    let last = Axis(x.ndim() - 1);
    Ok(x.map_axis(last, |row| {
        if row.iter().all(|&v| v == 0.0) {
            return SENTINEL;
        }
        row.iter()
            .enumerate()
            .fold(None::<(usize, f32)>, |best, (i, &v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })
            .map_or(SENTINEL, |(i, _)| Index::try_from(i).unwrap_or(SENTINEL))
    }))
}

/// Converts every split of a dataset to one-hot tensors.
///
/// The input is left untouched and a new set of splits is returned.
///
/// # Errors
///
/// * If any split fails to convert (see [`index_to_one_hot`]). The error
///   names the split.
pub fn dataset_to_one_hot<D: Dimension>(
    splits: &Splits<Array<Index, D>>,
    alphabet_size: usize,
) -> Result<Splits<Array<f32, D::Larger>>> {
    splits
        .iter()
        .map(|(name, x)| {
            ftlog::debug!("One-hot encoding split {name} with shape {:?}", x.shape());
            index_to_one_hot(x, alphabet_size)
                .map(|one_hot| (name.clone(), one_hot))
                .map_err(|e| SeqError::Split {
                    split: name.clone(),
                    source: Box::new(e),
                })
        })
        .collect()
}
