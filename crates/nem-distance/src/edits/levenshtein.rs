//! Weighted Levenshtein distance.

use crate::number::Int;

use super::{step, Weights};

/// Computes the Levenshtein distance between two sequences.
///
/// The Levenshtein distance is defined as the minimum total weight of the
/// edits needed to transform one sequence into the other, with the allowable
/// edit operations being insertion, deletion, or substitution of a single
/// element. It is named after Vladimir Levenshtein, who considered this
/// distance in 1965.
///
/// We use the Wagner-Fischer algorithm with a single rolling row, so the
/// working memory is linear in the length of the shorter sequence. The
/// longer sequence is always the outer dimension of the table. The first
/// row and column of the table count elements and are not weighted, so an
/// empty sequence is always at a distance equal to the length of the other.
///
/// Returns `None` if the distance does not fit in `U`. Cells too large for
/// `U` are treated as unreachable, so a small distance is found even when
/// the table's base row is wider than `U`.
///
/// The weights are trusted. Use [`crate::distance`] to have them validated.
///
/// # Arguments
///
/// * `x` - The first sequence.
/// * `y` - The second sequence.
/// * `weights` - `add_delete` for insertions and deletions, `substitute`
///   for substitutions.
///
/// # Examples
///
/// ```
/// use nem_distance::{edits::levenshtein, Weights};
///
/// let x = "mark".chars().collect::<Vec<_>>();
/// let y = "market".chars().collect::<Vec<_>>();
///
/// let distance = levenshtein::<_, u16>(&x, &y, Weights::default());
/// assert_eq!(distance, Some(2));
///
/// let x = "market".chars().collect::<Vec<_>>();
/// let y = "markte".chars().collect::<Vec<_>>();
///
/// let distance = levenshtein::<_, u16>(&x, &y, Weights::default());
/// assert_eq!(distance, Some(2));
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
#[must_use]
pub fn levenshtein<T: PartialEq, U: Int>(x: &[T], y: &[T], weights: Weights<U>) -> Option<U> {
    if x.is_empty() {
        // handle special case of 0 length
        U::try_from_usize(y.len())
    } else if y.is_empty() {
        // handle special case of 0 length
        U::try_from_usize(x.len())
    } else if x.len() < y.len() {
        // require that x is no shorter than y
        _levenshtein(y, x, weights)
    } else {
        _levenshtein(x, y, weights)
    }
}

/// Helper for Levenshtein distance. `long` must be no shorter than `short`.
/// A `None` cell is larger than `U` can hold.
fn _levenshtein<T: PartialEq, U: Int>(long: &[T], short: &[T], weights: Weights<U>) -> Option<U> {
    let Weights { add_delete, substitute } = weights;

    // initialize the DP row for the shorter sequence
    let mut cur = (0..=short.len()).map(U::try_from_usize).collect::<Vec<_>>();

    for (i, l) in long.iter().enumerate() {
        // `pre` holds the cell diagonally up and to the left
        let mut pre = cur[0];
        cur[0] = U::try_from_usize(i + 1);
        for (j, s) in short.iter().enumerate() {
            let tmp = cur[j + 1];
            let cost = if l == s { U::ZERO } else { substitute };
            cur[j + 1] = [
                // deletion
                step(tmp, add_delete),
                // insertion
                step(cur[j], add_delete),
                // match or substitution
                step(pre, cost),
            ]
            .into_iter()
            .flatten()
            .min();
            pre = tmp;
        }
    }

    cur[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let d = levenshtein::<_, u32>(&empty, &empty, Weights::default());
        assert_eq!(d, Some(0));

        let d = levenshtein::<_, u32>(&empty, &chars("abc"), Weights::new(5, 5));
        assert_eq!(d, Some(3));

        let d = levenshtein::<_, u32>(&chars("abcd"), &empty, Weights::new(5, 5));
        assert_eq!(d, Some(4));
    }

    #[test]
    fn weighted_substitution() {
        let (x, y) = (chars("simple"), chars("pimple"));

        let d = levenshtein::<_, u32>(&x, &y, Weights::new(1, 1));
        assert_eq!(d, Some(1));

        // a substitution dearer than a deletion plus an insertion is never used
        let d = levenshtein::<_, u32>(&x, &y, Weights::new(1, 5));
        assert_eq!(d, Some(2));
    }

    #[test]
    fn tokens() {
        let x = [0, 1, 2, 2, 1, 3, 4];
        let y = [5, 1, 2, 2, 6, 3];

        let d = levenshtein::<_, u8>(&x, &y, Weights::default());
        assert_eq!(d, Some(3));
    }
}
