//! Edit distances between strings and phrases with the default weights.

use crate::{
    distance,
    sequences::{characters, phrase, tokens},
    Algorithm, DistanceError, Weights,
};

/// The edit distance between two strings, compared character by character.
///
/// Leading and trailing whitespace is trimmed from both strings first. Every
/// edit has a weight of one.
///
/// # Errors
///
/// * `DistanceError::SequenceTooLong` if `algorithm` is Damerau-Levenshtein
///   and the strings are too long for its table.
///
/// # Examples
///
/// ```
/// use nem_distance::{min_edit_distance, Algorithm};
///
/// assert_eq!(min_edit_distance("  quick", "quickly ", Algorithm::Levenshtein), Ok(2));
/// assert_eq!(min_edit_distance("ambidextrous", "dextrose", Algorithm::None), Ok(4));
/// ```
pub fn min_edit_distance(x: &str, y: &str, algorithm: Algorithm) -> Result<usize, DistanceError> {
    let (x, y) = (characters(x.trim()), characters(y.trim()));
    distance(&x, &y, algorithm, Weights::default())
}

/// The edit distance between two phrases, compared token by token.
///
/// Both phrases are split with [`crate::tokenize`]. Every edit has a weight
/// of one.
///
/// # Errors
///
/// * `DistanceError::SequenceTooLong` if `algorithm` is Damerau-Levenshtein
///   and the phrases have too many tokens for its table.
///
/// # Examples
///
/// ```
/// use nem_distance::{phrase_edit_distance, Algorithm};
///
/// let x = "We the people of the United States.";
/// let y = "We the people the of United States.";
///
/// assert_eq!(phrase_edit_distance(x, y, Algorithm::Levenshtein), Ok(2));
/// assert_eq!(phrase_edit_distance(x, y, Algorithm::DamerauLevenshtein), Ok(1));
/// ```
pub fn phrase_edit_distance(x: &str, y: &str, algorithm: Algorithm) -> Result<usize, DistanceError> {
    phrase_tokens_edit_distance(&phrase(x), &phrase(y), algorithm)
}

/// The edit distance between two lists of tokens from any tokenizer.
///
/// # Errors
///
/// See [`phrase_edit_distance`].
pub fn phrase_tokens_edit_distance<S: AsRef<str>>(
    x: &[S],
    y: &[S],
    algorithm: Algorithm,
) -> Result<usize, DistanceError> {
    let (x, y) = (tokens(x), tokens(y));
    distance(&x, &y, algorithm, Weights::default())
}
