//! Random edits of index sequences, for simulating sequence drift.

use rand::Rng;
use seqdata::{Index, Result, SeqError};

use crate::random_data::symbol_bound;

/// An edit that keeps the length of a sequence unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Overwrite the symbol at `position`.
    Sub {
        /// Where to overwrite.
        position: usize,
        /// The new symbol.
        symbol: Index,
    },
    /// Remove the symbol at `deleted`, then insert `symbol` at `inserted` in
    /// the shortened sequence.
    DelIns {
        /// Position of the removed symbol.
        deleted: usize,
        /// Position of the inserted symbol, after the removal.
        inserted: usize,
        /// The inserted symbol.
        symbol: Index,
    },
}

impl Edit {
    /// The number of edit units this edit spends from a mutation budget.
    #[must_use]
    pub const fn cost(&self) -> usize {
        match self {
            Self::Sub { .. } => 1,
            Self::DelIns { .. } => 2,
        }
    }

    /// Applies the edit in place.
    ///
    /// # Panics
    ///
    /// * If a position is out of bounds for `sequence`.
    pub fn apply(&self, sequence: &mut Vec<Index>) {
        match *self {
            Self::Sub { position, symbol } => sequence[position] = symbol,
            Self::DelIns {
                deleted,
                inserted,
                symbol,
            } => {
                sequence.remove(deleted);
                sequence.insert(inserted, symbol);
            }
        }
    }
}

/// Draws an edit for a non-empty sequence of the given length.
///
/// A fair coin picks the kind of edit. Positions and the symbol are then
/// drawn uniformly.
fn draw_edit<R: Rng>(length: usize, bound: Index, rng: &mut R) -> Edit {
    if rng.gen_bool(0.5) {
        let position = rng.gen_range(0..length);
        let symbol = rng.gen_range(0..bound);
        Edit::Sub { position, symbol }
    } else {
        let deleted = rng.gen_range(0..length);
        // The shortened sequence has `length - 1` items and so `length` insertion points.
        let inserted = rng.gen_range(0..length);
        let symbol = rng.gen_range(0..bound);
        Edit::DelIns {
            deleted,
            inserted,
            symbol,
        }
    }
}

/// Generates (but does not apply) a random edit to a given sequence.
///
/// # Arguments
///
/// * `sequence`: The sequence to edit.
/// * `alphabet_size`: The number of symbols to choose the new symbol from.
/// * `rng`: The random stream.
///
/// # Errors
///
/// * If `alphabet_size` is zero.
/// * If `sequence` is empty.
pub fn generate_random_edit<R: Rng>(sequence: &[Index], alphabet_size: usize, rng: &mut R) -> Result<Edit> {
    let bound = symbol_bound(alphabet_size)?;
    if sequence.is_empty() {
        return Err(SeqError::EmptySequence(1));
    }
    Ok(draw_edit(sequence.len(), bound, rng))
}

/// The result of [`k_mutations_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// The mutated copy.
    pub sequence: Vec<Index>,
    /// The edits, in the order they were applied.
    pub edits: Vec<Edit>,
    /// The total cost of the edits.
    pub spent: usize,
}

/// Like [`k_mutations`], but also reports the edits that were applied.
///
/// # Errors
///
/// See [`k_mutations`].
pub fn k_mutations_traced<R: Rng>(sequence: &[Index], k: usize, alphabet_size: usize, rng: &mut R) -> Result<Mutation> {
    let bound = symbol_bound(alphabet_size)?;
    if k > 0 && sequence.is_empty() {
        return Err(SeqError::EmptySequence(k));
    }

    let mut mutated = sequence.to_vec();
    let mut edits = Vec::new();
    let mut spent = 0;
    while spent < k {
        let edit = draw_edit(mutated.len(), bound, rng);
        edit.apply(&mut mutated);
        spent += edit.cost();
        edits.push(edit);
    }

    if spent > k {
        ftlog::debug!("Spent {spent} edit units for a budget of {k}");
    }

    Ok(Mutation {
        sequence: mutated,
        edits,
        spent,
    })
}

/// Returns a copy of `sequence` with random edits applied until a budget of
/// `k` edit units is spent.
///
/// Each step flips a fair coin between a substitution (1 unit) and a
/// deletion followed by an insertion (2 units). The coin does not look at the
/// remaining budget, so when one unit is left and a deletion-insertion comes
/// up, it is still applied and `k + 1` units are spent in total.
///
/// The length of the sequence never changes and `sequence` itself is not
/// modified.
///
/// # Arguments
///
/// * `sequence`: The sequence to start from.
/// * `k`: The edit budget.
/// * `alphabet_size`: The number of symbols to draw new symbols from.
/// * `rng`: The random stream.
///
/// # Errors
///
/// * If `alphabet_size` is zero.
/// * If `sequence` is empty and `k` is positive.
pub fn k_mutations<R: Rng>(sequence: &[Index], k: usize, alphabet_size: usize, rng: &mut R) -> Result<Vec<Index>> {
    k_mutations_traced(sequence, k, alphabet_size, rng).map(|m| m.sequence)
}
