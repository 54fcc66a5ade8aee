//! The commands under the `seqtools` CLI.

pub mod batches;
pub mod encode;
pub mod generate;
pub mod one_hot;

use std::path::PathBuf;

use clap::Subcommand;
use seqdata::{alphabet, Alphabet};

/// The alphabets available on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetName {
    #[clap(name = "dna")]
    Dna,
    #[clap(name = "iupac")]
    Iupac,
    #[clap(name = "protein")]
    Protein,
    #[clap(name = "english")]
    English,
}

impl AlphabetName {
    /// Get the `Alphabet` with this name.
    pub const fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Dna => &alphabet::DNA,
            Self::Iupac => &alphabet::IUPAC,
            Self::Protein => &alphabet::PROTEIN,
            Self::English => &alphabet::ENGLISH,
        }
    }
}

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random sequences and k-mutated variants, split into
    /// train/val/test.
    Generate {
        /// The alphabet to draw symbols from.
        #[arg(short('a'), long, default_value = "dna", ignore_case = true)]
        alphabet: AlphabetName,

        /// The number of random seed sequences.
        #[arg(short('n'), long)]
        num: usize,

        /// The length of every sequence.
        #[arg(short('L'), long)]
        length: usize,

        /// The edit budget of each variant.
        #[arg(short('k'), long, default_value = "1")]
        k: usize,

        /// The number of variants per seed sequence.
        #[arg(short('c'), long, default_value = "0")]
        copies: usize,

        /// The fraction of sequences to put in the validation split.
        #[arg(long, default_value = "0.1")]
        val_fraction: f64,

        /// The fraction of sequences to put in the test split.
        #[arg(long, default_value = "0.1")]
        test_fraction: f64,

        /// The path to the output dataset file.
        #[arg(short('o'), long)]
        out_path: PathBuf,
    },
    /// Encode a file of strings, one per line, as an index dataset.
    Encode {
        /// The path to the input text file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The alphabet to encode with.
        #[arg(short('a'), long, default_value = "dna", ignore_case = true)]
        alphabet: AlphabetName,

        /// Pad or truncate every sequence to this length. Defaults to the
        /// length of the longest sequence.
        #[arg(short('L'), long)]
        length: Option<usize>,

        /// The name of the split to store the sequences under.
        #[arg(long, default_value = "train")]
        split: String,

        /// The path to the output dataset file.
        #[arg(short('o'), long)]
        out_path: PathBuf,
    },
    /// Convert an index dataset to one-hot tensors.
    OneHot {
        /// The path to the input dataset file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The alphabet the indices refer to.
        #[arg(short('a'), long, default_value = "dna", ignore_case = true)]
        alphabet: AlphabetName,

        /// The path to the output dataset file.
        #[arg(short('o'), long)]
        out_path: PathBuf,
    },
    /// Run one shuffled pass of batches over every split of an index dataset.
    Batches {
        /// The path to the input dataset file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The number of sequences per batch.
        #[arg(short('b'), long, default_value = "32")]
        batch_size: usize,

        /// The number of threads used to gather each batch.
        #[arg(short('w'), long, default_value = "0")]
        workers: usize,
    },
}
