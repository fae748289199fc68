//! Turning text into sequences of comparable elements.

use crate::tokenize;

/// The characters of `text`, one element each.
///
/// # Examples
///
/// ```
/// use nem_distance::sequences::characters;
///
/// assert_eq!(characters("abc"), vec!['a', 'b', 'c']);
/// assert!(characters("").is_empty());
/// ```
#[must_use]
pub fn characters(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// The tokens of `text`, as produced by [`tokenize`].
#[must_use]
pub fn phrase(text: &str) -> Vec<&str> {
    tokenize(text).collect()
}

/// A view of tokens the caller has already produced.
///
/// This is how a custom tokenizer's output is compared with the same
/// distance functions as [`phrase`].
#[must_use]
pub fn tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<&str> {
    tokens.iter().map(AsRef::as_ref).collect()
}
