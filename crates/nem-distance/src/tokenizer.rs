//! Splitting text into word and punctuation tokens.
//!
//! The tokenizer scans left to right, growing a token until a non-word
//! character ends it. The ending character is kept as the last character of
//! the token, so `"We the people."` becomes `["We ", "the ", "people."]`.
//! Apostrophes, hyphens and underscores are kept inside a word when both of
//! their neighbours are word characters, and end the token otherwise.

use core::iter::FusedIterator;

/// The punctuation that may appear inside a word.
const WORD_INTERNAL: [char; 3] = ['\'', '-', '_'];

/// Whether `c` is a word character: a letter, a digit, or an underscore.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a neighbouring position holds a word character. A missing
/// neighbour, before the start or past the end of the text, does not.
fn is_word_neighbour(c: Option<char>) -> bool {
    c.is_some_and(is_word_char)
}

/// Tokenizes a phrase into words and punctuation.
///
/// Returns a lazy iterator over slices of `text`. Cloning the iterator, or
/// calling `tokenize` again, restarts the scan.
///
/// A final word that is not followed by a non-word character is not
/// yielded. Use [`Tokens::with_trailing`] to keep it.
///
/// # Examples
///
/// ```
/// use nem_distance::tokenize;
///
/// let tokens = tokenize("We the people of the United States.").collect::<Vec<_>>();
/// assert_eq!(
///     tokens,
///     vec!["We ", "the ", "people ", "of ", "the ", "United ", "States."]
/// );
///
/// let tokens = tokenize("'Tis a well-known fact").collect::<Vec<_>>();
/// assert_eq!(tokens, vec!["'", "Tis ", "a ", "well-known "]);
///
/// let tokens = tokenize("'Tis a well-known fact").with_trailing().collect::<Vec<_>>();
/// assert_eq!(tokens, vec!["'", "Tis ", "a ", "well-known ", "fact"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        start: 0,
        pos: 0,
        prev: None,
        trailing: false,
    }
}

/// An iterator over the tokens of a text. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    /// The text being scanned.
    text: &'a str,
    /// Byte offset where the current token starts.
    start: usize,
    /// Byte offset of the next character to scan.
    pos: usize,
    /// The character before `pos`, if any.
    prev: Option<char>,
    /// Whether to yield an unterminated final token.
    trailing: bool,
}

impl<'a> Tokens<'a> {
    /// Also yield the final token when no non-word character ends it.
    #[must_use]
    pub const fn with_trailing(mut self) -> Self {
        self.trailing = true;
        self
    }

    /// The part of the text that has not been yielded yet.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.text[self.start..]
    }

    /// Ends the current token after the character at `end` and returns it.
    fn flush(&mut self, end: usize) -> &'a str {
        let token = &self.text[self.start..end];
        self.start = end;
        token
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(curr) = self.text[self.pos..].chars().next() {
            let end = self.pos + curr.len_utf8();
            let prev = self.prev;
            let next = self.text[end..].chars().next();

            self.pos = end;
            self.prev = Some(curr);

            let ends_token = if WORD_INTERNAL.contains(&curr) {
                !is_word_neighbour(prev) || !is_word_neighbour(next)
            } else {
                !is_word_char(curr)
            };

            if ends_token {
                return Some(self.flush(end));
            }
        }

        if self.trailing && self.start < self.text.len() {
            return Some(self.flush(self.text.len()));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at most one token per remaining character, plus the pending one
        let pending = usize::from(self.start < self.pos);
        (0, Some(self.text.len() - self.pos + pending))
    }
}

impl FusedIterator for Tokens<'_> {}
