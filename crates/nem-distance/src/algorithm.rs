//! The edit distance algorithms that can be selected at run time.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The allowable algorithms for calculating an edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// No edit distance algorithm. The distance is the difference in lengths.
    None,
    /// Insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Positional mismatches, with the difference in lengths counted as
    /// additions.
    Hamming,
    /// Insertions, deletions, substitutions and adjacent transpositions.
    DamerauLevenshtein,
}

impl Algorithm {
    /// All the algorithms, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Levenshtein, Self::Hamming, Self::DamerauLevenshtein];

    /// The name used when parsing and printing the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Levenshtein => "levenshtein",
            Self::Hamming => "hamming",
            Self::DamerauLevenshtein => "damerau-levenshtein",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| format!("Unknown algorithm: {s}"))
    }
}
