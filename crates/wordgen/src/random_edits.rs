//! Apply random edits to strings, for checking distances against a known
//! upper bound.

use rand::prelude::*;

/// An edit to a string. Indices count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Insert a character before the given index.
    Ins(usize, char),
    /// Delete the character at the given index.
    Del(usize),
    /// Substitute the character at the given index.
    Sub(usize, char),
    /// Swap the character at the given index with the one after it.
    Swap(usize),
}

/// Generates (but does not apply) a random edit to a given string.
///
/// The character for an insertion or substitution is drawn from `alphabet`.
/// Returns `None` when no edit is possible, i.e. when the alphabet is empty.
pub fn random_edit<R: Rng>(text: &str, alphabet: &[char], rng: &mut R) -> Option<Edit> {
    let c = *alphabet.choose(rng)?;
    let len = text.chars().count();

    // an empty string can only grow
    if len == 0 {
        return Some(Edit::Ins(0, c));
    }

    Some(match rng.gen_range(0..4) {
        0 => Edit::Ins(rng.gen_range(0..=len), c),
        1 => Edit::Del(rng.gen_range(0..len)),
        2 => Edit::Sub(rng.gen_range(0..len), c),
        _ if len > 1 => Edit::Swap(rng.gen_range(0..len - 1)),
        _ => Edit::Sub(0, c),
    })
}

/// Applies an edit to a string. Edits whose index is out of range leave the
/// string unchanged.
#[must_use]
pub fn apply_edit(text: &str, edit: Edit) -> String {
    let mut chars = text.chars().collect::<Vec<_>>();
    match edit {
        Edit::Ins(i, c) if i <= chars.len() => chars.insert(i, c),
        Edit::Del(i) if i < chars.len() => {
            chars.remove(i);
        }
        Edit::Sub(i, c) if i < chars.len() => chars[i] = c,
        Edit::Swap(i) if i + 1 < chars.len() => chars.swap(i, i + 1),
        _ => (),
    }
    chars.into_iter().collect()
}

/// Applies `count` random edits to a string, one after another.
///
/// A swap is two Levenshtein edits, so the result is within `2 * count`
/// unit-weight Levenshtein edits of `text`.
pub fn apply_random_edits<R: Rng>(text: &str, count: usize, alphabet: &[char], rng: &mut R) -> String {
    (0..count).fold(text.to_string(), |acc, _| match random_edit(&acc, alphabet, rng) {
        Some(edit) => apply_edit(&acc, edit),
        None => acc,
    })
}
