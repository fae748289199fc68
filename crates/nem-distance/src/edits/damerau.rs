//! Weighted Damerau-Levenshtein distance.

use crate::number::Int;

use super::{step, Weights};

/// Computes the Damerau-Levenshtein distance between two sequences.
///
/// This is the Levenshtein distance with one more operation: the
/// transposition of two adjacent elements. This is the restricted variant,
/// also known as the optimal string alignment distance, in which no element
/// is edited more than once.
///
/// The transposition check looks two rows and two columns back, so the whole
/// `(x.len() + 1) x (y.len() + 1)` table is kept. As with [`levenshtein`],
/// the first row and column are not weighted.
///
/// Returns `None` if the distance does not fit in `U`.
///
/// The weights are trusted, and the table size is not checked. Use
/// [`crate::distance`] for both.
///
/// # Arguments
///
/// * `x` - The first sequence.
/// * `y` - The second sequence.
/// * `weights` - `add_delete` for insertions and deletions, `substitute`
///   for both substitutions and transpositions.
///
/// # Examples
///
/// ```
/// use nem_distance::{edits::damerau_levenshtein, Weights};
///
/// let x = "market".chars().collect::<Vec<_>>();
/// let y = "markte".chars().collect::<Vec<_>>();
///
/// let distance = damerau_levenshtein::<_, u16>(&x, &y, Weights::default());
/// assert_eq!(distance, Some(1));
/// ```
///
/// # References
///
/// * [Damerau-Levenshtein distance](https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance)
///
/// [`levenshtein`]: crate::edits::levenshtein
#[must_use]
pub fn damerau_levenshtein<T: PartialEq, U: Int>(x: &[T], y: &[T], weights: Weights<U>) -> Option<U> {
    if x.is_empty() {
        return U::try_from_usize(y.len());
    } else if y.is_empty() {
        return U::try_from_usize(x.len());
    }

    let table = compute_table(x, y, weights);
    table[x.len()][y.len()]
}

/// Fills the Damerau-Levenshtein table. `table[i][j]` is the distance between
/// the first `i` elements of `x` and the first `j` elements of `y`, or `None`
/// if that is larger than `U` can hold.
fn compute_table<T: PartialEq, U: Int>(x: &[T], y: &[T], weights: Weights<U>) -> Vec<Vec<Option<U>>> {
    let Weights { add_delete, substitute } = weights;

    let mut table = vec![vec![None; y.len() + 1]; x.len() + 1];

    // Initialize the left-most column and the top row.
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = U::try_from_usize(i);
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = U::try_from_usize(j);
    }

    for i in 1..=x.len() {
        for j in 1..=y.len() {
            let cost = if x[i - 1] == y[j - 1] { U::ZERO } else { substitute };

            let transposition = if i > 1 && j > 1 && x[i - 1] == y[j - 2] && x[i - 2] == y[j - 1] {
                step(table[i - 2][j - 2], cost)
            } else {
                None
            };

            table[i][j] = [
                // deletion
                step(table[i - 1][j], add_delete),
                // insertion
                step(table[i][j - 1], add_delete),
                // match or substitution
                step(table[i - 1][j - 1], cost),
                transposition,
            ]
            .into_iter()
            .flatten()
            .min();
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn transposition_table() {
        let table = compute_table::<_, u8>(&chars("ab"), &chars("ba"), Weights::default());
        assert_eq!(table, [[0_u8, 1, 2], [1, 1, 1], [2, 1, 1]].map(|row| row.map(Some)));
    }

    #[test]
    fn weighted_transposition() {
        let (x, y) = (chars("market"), chars("markte"));

        // transposing costs the substitute weight
        let d = damerau_levenshtein::<_, u32>(&x, &y, Weights::new(1, 1));
        assert_eq!(d, Some(1));

        // a dear transposition loses to a deletion plus an insertion
        let d = damerau_levenshtein::<_, u32>(&x, &y, Weights::new(1, 4));
        assert_eq!(d, Some(2));
    }

    #[test]
    fn restricted_variant() {
        // the optimal string alignment distance cannot edit a transposed pair again
        let d = damerau_levenshtein::<_, u32>(&chars("ca"), &chars("abc"), Weights::default());
        assert_eq!(d, Some(3));
    }

    #[test]
    fn unreachable_cells() {
        // the base row passes 255 but the answer stays small
        let x = chars(&"ab".repeat(150));
        let y = chars(&"ba".repeat(150));

        let table = compute_table::<_, u8>(&x, &y, Weights::default());
        assert_eq!(table[0][300], None);
        assert_eq!(table[300][0], None);
        // one insertion at the front and one deletion at the back
        assert_eq!(table[300][300], Some(2));

        // three transpositions
        let d = damerau_levenshtein::<_, u8>(&chars("abcdef"), &chars("badcfe"), Weights::default());
        assert_eq!(d, Some(3));
    }
}
