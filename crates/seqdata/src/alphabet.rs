//! Fixed alphabets mapping single-character symbols to contiguous indices.

use crate::{Index, SENTINEL};

/// An alphabet maps each of its symbols to a unique index in `[0, size)`.
///
/// The index of a symbol is its position in the `symbols` slice, so indices
/// are unique and contiguous by construction. The sentinel is never the index
/// of a symbol.
#[derive(Debug, PartialEq, Eq)]
pub struct Alphabet {
    /// The name under which the alphabet is registered.
    name: &'static str,
    /// The symbols, in index order.
    symbols: &'static [char],
}

/// Nucleotides.
pub static DNA: Alphabet = Alphabet::new("DNA", &['A', 'C', 'G', 'T']);

/// IUPAC nucleotide codes, including ambiguity codes.
///
/// See <https://www.cottongen.org/help/nomenclature/IUPAC_nt>.
pub static IUPAC: Alphabet = Alphabet::new(
    "IUPAC",
    &['A', 'B', 'C', 'D', 'G', 'H', 'K', 'M', 'N', 'R', 'S', 'T', 'V', 'W', 'Y'],
);

/// The twenty standard amino acids.
pub static PROTEIN: Alphabet = Alphabet::new(
    "PROTEIN",
    &[
        'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
    ],
);

/// Upper-case English letters.
pub static ENGLISH: Alphabet = Alphabet::new(
    "ENGLISH",
    &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V',
        'W', 'X', 'Y', 'Z',
    ],
);

/// All registered alphabets.
pub static ALPHABETS: [&Alphabet; 4] = [&DNA, &IUPAC, &PROTEIN, &ENGLISH];

impl Alphabet {
    /// Creates an alphabet whose indices are the positions of `symbols`.
    const fn new(name: &'static str, symbols: &'static [char]) -> Self {
        Self { name, symbols }
    }

    /// Looks up a registered alphabet by name, ignoring case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        ALPHABETS.iter().copied().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// The name of the alphabet.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The symbols of the alphabet, in index order.
    #[must_use]
    pub const fn symbols(&self) -> &'static [char] {
        self.symbols
    }

    /// The number of symbols in the alphabet.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the index of `symbol`, or `None` if it is not in the alphabet.
    ///
    /// Matching is exact, so lower-case letters are not in any registered
    /// alphabet.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn index_of(&self, symbol: char) -> Option<Index> {
        self.symbols.iter().position(|&c| c == symbol).map(|i| i as Index)
    }

    /// Returns the symbol at `index`, or `None` for the sentinel and for
    /// indices outside the alphabet.
    #[must_use]
    pub fn symbol_of(&self, index: Index) -> Option<char> {
        usize::try_from(index).ok().and_then(|i| self.symbols.get(i).copied())
    }

    /// Decodes an index sequence back to a string.
    ///
    /// Positions without a symbol are rendered as `'-'`.
    #[must_use]
    pub fn decode(&self, indices: &[Index]) -> String {
        indices
            .iter()
            .map(|&i| {
                if i == SENTINEL {
                    '-'
                } else {
                    self.symbol_of(i).unwrap_or('-')
                }
            })
            .collect()
    }
}
