//! The commands under the `nem` CLI.

pub mod bench;
pub mod distance;
pub mod score;
pub mod tokenize;

use clap::Subcommand;

use crate::algorithms::ShellAlgorithm;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// The edit distance between two strings or phrases.
    Distance {
        /// The first text.
        x: String,

        /// The second text.
        y: String,

        /// The edit distance algorithm to use.
        #[arg(short('a'), long, default_value = "levenshtein")]
        algorithm: ShellAlgorithm,

        /// The weight of an insertion or deletion.
        #[arg(short('d'), long, default_value_t = 1, allow_negative_numbers = true)]
        add_delete_weight: i64,

        /// The weight of a substitution, or of a transposition.
        #[arg(short('w'), long, default_value_t = 1, allow_negative_numbers = true)]
        substitute_weight: i64,

        /// Compare tokens instead of characters.
        #[arg(short('p'), long, default_value_t = false)]
        phrase: bool,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Split a text into word and punctuation tokens.
    Tokenize {
        /// The text to split.
        text: String,

        /// Keep a final word that no punctuation or space ends.
        #[arg(short('t'), long, default_value_t = false)]
        trailing: bool,

        /// Print the tokens as a JSON array.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Similarity, error and accuracy percentages of an actual text against
    /// an expected one.
    Score {
        /// The expected text.
        expected: String,

        /// The actual text.
        actual: String,

        /// The edit distance algorithm to use.
        #[arg(short('a'), long, default_value = "levenshtein")]
        algorithm: ShellAlgorithm,

        /// Compare tokens instead of characters.
        #[arg(short('p'), long, default_value_t = false)]
        phrase: bool,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Time the edit distance over random pairs of words or phrases.
    Bench {
        /// The number of pairs to generate.
        #[arg(short('n'), long, default_value = "100000")]
        pairs: usize,

        /// The edit distance algorithm to use.
        #[arg(short('a'), long, default_value = "levenshtein")]
        algorithm: ShellAlgorithm,

        /// Generate phrases instead of words.
        #[arg(short('p'), long, default_value_t = false)]
        phrase: bool,

        /// Spread the pairs over all cores.
        #[arg(short('P'), long, default_value_t = false)]
        parallel: bool,
    },
}
