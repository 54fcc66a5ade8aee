#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items
)]
#![doc = include_str!("../README.md")]

pub mod alphabet;
pub mod encoding;
mod error;
pub mod io;
pub mod loader;

pub use alphabet::{Alphabet, ALPHABETS};
pub use error::{Result, SeqError};

/// The type used for symbol indices in a sequence.
pub type Index = i32;

/// Marks a position that holds no symbol of the alphabet, either because the
/// sequence was padded or because the character was not in the alphabet.
pub const SENTINEL: Index = -1;

/// A dataset split by name, e.g. `"train"`, `"val"` and `"test"`.
pub type Splits<T> = std::collections::BTreeMap<String, T>;

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
