//! Algorithms that may be chosen on the command line.

use nem_distance::Algorithm;

/// The available edit distance algorithms.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ShellAlgorithm {
    #[clap(name = "none")]
    None,
    #[clap(name = "levenshtein")]
    Levenshtein,
    #[clap(name = "hamming")]
    Hamming,
    #[clap(name = "damerau-levenshtein")]
    DamerauLevenshtein,
}

impl ShellAlgorithm {
    /// Get the library `Algorithm` for this choice.
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::None => Algorithm::None,
            Self::Levenshtein => Algorithm::Levenshtein,
            Self::Hamming => Algorithm::Hamming,
            Self::DamerauLevenshtein => Algorithm::DamerauLevenshtein,
        }
    }
}
