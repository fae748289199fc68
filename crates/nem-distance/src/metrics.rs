//! Similarity, error and accuracy percentages derived from edit distances.
//!
//! Character-mode functions trim their inputs, as [`min_edit_distance`]
//! does, and measure lengths in characters of the trimmed text. Phrase-mode
//! functions measure lengths in tokens. A percentage against a length of zero
//! is an error rather than a NaN.

use crate::{
    min_edit_distance, phrase_tokens_edit_distance,
    sequences::phrase,
    Algorithm, DistanceError,
};

/// `distance / length * 100`, refusing an empty length.
#[allow(clippy::cast_precision_loss)]
fn percent_of(distance: usize, length: usize) -> Result<f64, DistanceError> {
    if length == 0 {
        Err(DistanceError::EmptyReference)
    } else {
        Ok(distance as f64 / length as f64 * 100.0)
    }
}

/// The number of characters left after trimming.
fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// The percentage of the longer string that the two strings share.
///
/// # Errors
///
/// * `DistanceError::EmptyReference` if both strings are empty after
///   trimming.
/// * Any error from [`min_edit_distance`].
///
/// # Examples
///
/// ```
/// use nem_distance::{metrics::similarity_percentage, Algorithm};
///
/// let similarity = similarity_percentage("mark", "market", Algorithm::Levenshtein).unwrap();
/// assert!((similarity - 200.0 / 3.0).abs() < 1e-9);
/// ```
pub fn similarity_percentage(x: &str, y: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    let distance = min_edit_distance(x, y, algorithm)?;
    let length = trimmed_len(x).max(trimmed_len(y));
    percent_of(distance, length).map(|p| 100.0 - p)
}

/// The percentage of `expected` that `actual` gets wrong.
///
/// This can exceed 100 when `actual` is much longer than `expected`.
///
/// # Errors
///
/// * `DistanceError::EmptyReference` if `expected` is empty after trimming.
/// * Any error from [`min_edit_distance`].
pub fn error_percentage(expected: &str, actual: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    let distance = min_edit_distance(expected, actual, algorithm)?;
    percent_of(distance, trimmed_len(expected))
}

/// The percentage of `expected` that `actual` gets right, i.e. 100 minus the
/// [`error_percentage`].
///
/// # Errors
///
/// See [`error_percentage`].
pub fn accuracy_percentage(expected: &str, actual: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    error_percentage(expected, actual, algorithm).map(|e| 100.0 - e)
}

/// [`similarity_percentage`] over the tokens of two phrases.
///
/// # Errors
///
/// See [`phrase_similarity_percentage_tokens`].
pub fn phrase_similarity_percentage(x: &str, y: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    phrase_similarity_percentage_tokens(&phrase(x), &phrase(y), algorithm)
}

/// [`similarity_percentage`] over two lists of tokens.
///
/// # Errors
///
/// * `DistanceError::EmptyReference` if both lists are empty.
/// * Any error from [`phrase_tokens_edit_distance`].
pub fn phrase_similarity_percentage_tokens<S: AsRef<str>>(
    x: &[S],
    y: &[S],
    algorithm: Algorithm,
) -> Result<f64, DistanceError> {
    let distance = phrase_tokens_edit_distance(x, y, algorithm)?;
    percent_of(distance, x.len().max(y.len())).map(|p| 100.0 - p)
}

/// [`error_percentage`] over the tokens of two phrases.
///
/// # Errors
///
/// See [`phrase_error_percentage_tokens`].
///
/// # Examples
///
/// ```
/// use nem_distance::{metrics::phrase_error_percentage, Algorithm};
///
/// let expected = "The little house on the prairie.";
/// let actual = "The big tiger in the zoo.";
///
/// let error = phrase_error_percentage(expected, actual, Algorithm::Levenshtein).unwrap();
/// assert!((error - 400.0 / 6.0).abs() < 1e-9);
/// ```
pub fn phrase_error_percentage(expected: &str, actual: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    phrase_error_percentage_tokens(&phrase(expected), &phrase(actual), algorithm)
}

/// [`error_percentage`] over two lists of tokens.
///
/// # Errors
///
/// * `DistanceError::EmptyReference` if `expected` is empty.
/// * Any error from [`phrase_tokens_edit_distance`].
pub fn phrase_error_percentage_tokens<S: AsRef<str>>(
    expected: &[S],
    actual: &[S],
    algorithm: Algorithm,
) -> Result<f64, DistanceError> {
    let distance = phrase_tokens_edit_distance(expected, actual, algorithm)?;
    percent_of(distance, expected.len())
}

/// [`accuracy_percentage`] over the tokens of two phrases.
///
/// # Errors
///
/// See [`phrase_error_percentage_tokens`].
pub fn phrase_accuracy_percentage(expected: &str, actual: &str, algorithm: Algorithm) -> Result<f64, DistanceError> {
    phrase_error_percentage(expected, actual, algorithm).map(|e| 100.0 - e)
}

/// [`accuracy_percentage`] over two lists of tokens.
///
/// # Errors
///
/// See [`phrase_error_percentage_tokens`].
pub fn phrase_accuracy_percentage_tokens<S: AsRef<str>>(
    expected: &[S],
    actual: &[S],
    algorithm: Algorithm,
) -> Result<f64, DistanceError> {
    phrase_error_percentage_tokens(expected, actual, algorithm).map(|e| 100.0 - e)
}
