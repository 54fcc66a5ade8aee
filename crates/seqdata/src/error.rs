//! The error type shared by the sequence crates.

use thiserror::Error;

/// Errors from encoding, dataset I/O, batching and sequence generation.
#[derive(Debug, Error)]
pub enum SeqError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] bitcode::Error),

    /// An index was neither the sentinel nor a valid index of the alphabet.
    #[error("invalid index {index} at position {position} for an alphabet of size {alphabet_size}")]
    InvalidIndex {
        /// The offending value.
        index: crate::Index,
        /// Row-major position of the value in its array.
        position: usize,
        /// Size of the alphabet the value was checked against.
        alphabet_size: usize,
    },

    /// An alphabet of size zero was given.
    #[error("alphabet size must be positive")]
    EmptyAlphabet,

    /// A sequence must have at least one symbol to be edited.
    #[error("cannot apply {0} edit units to an empty sequence")]
    EmptySequence(usize),

    /// Batches must hold at least one item.
    #[error("batch size must be positive")]
    InvalidBatchSize,

    /// An array could not be built with the requested shape.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// A worker pool could not be started.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Converting one split of a dataset failed.
    #[error("split {split:?}: {source}")]
    Split {
        /// Name of the split.
        split: String,
        /// What went wrong.
        #[source]
        source: Box<SeqError>,
    },
}

/// Result alias for the sequence crates.
pub type Result<T> = std::result::Result<T, SeqError>;
