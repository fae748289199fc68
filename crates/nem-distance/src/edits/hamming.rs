//! Modified Hamming distance.

use crate::number::Int;

use super::length_difference;

/// Computes a modified Hamming distance between two sequences.
///
/// The Hamming distance is defined as the number of positions at which
/// the corresponding elements are different. It is named after Richard
/// Hamming, who introduced it in his fundamental paper on Hamming codes.
///
/// The modification allows sequences of different lengths: the elements past
/// the end of the shorter sequence are counted as additions, one each, and
/// every mismatched position within the shorter length costs
/// `substitute`. No alignment is searched for.
///
/// Returns `None` if the distance does not fit in `U`.
///
/// # Arguments
///
/// * `x` - The first sequence.
/// * `y` - The second sequence.
/// * `substitute` - The weight of a mismatched position.
///
/// # Examples
///
/// ```
/// use nem_distance::edits::modified_hamming;
///
/// let x = "good".chars().collect::<Vec<_>>();
/// let y = "bad".chars().collect::<Vec<_>>();
///
/// let distance = modified_hamming::<_, u16>(&x, &y, 1);
/// assert_eq!(distance, Some(4));
///
/// let x = "perfectionist".chars().collect::<Vec<_>>();
/// let y = "supremacist".chars().collect::<Vec<_>>();
///
/// let distance = modified_hamming::<_, u16>(&x, &y, 1);
/// assert_eq!(distance, Some(12));
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
#[must_use]
pub fn modified_hamming<T: PartialEq, U: Int>(x: &[T], y: &[T], substitute: U) -> Option<U> {
    let mismatches = x.iter().zip(y.iter()).filter(|(a, b)| a != b).count();
    let mismatch_cost = if substitute == U::ZERO {
        U::ZERO
    } else {
        U::try_from_usize(mismatches)?.checked_mul(substitute)?
    };
    length_difference::<T, U>(x, y)?.checked_add(mismatch_cost)
}

#[cfg(test)]
mod tests {
    use super::modified_hamming;

    #[test]
    fn weighted_mismatches() {
        let x = ['a', 'b', 'c', 'd'];
        let y = ['a', 'x', 'c'];

        let d = modified_hamming::<_, u32>(&x, &y, 1);
        assert_eq!(d, Some(2));

        // only the mismatch is weighted, not the missing element
        let d = modified_hamming::<_, u32>(&x, &y, 3);
        assert_eq!(d, Some(4));
    }

    #[test]
    fn no_alignment() {
        // a single shift mismatches every position
        let x = ['a', 'b', 'c'];
        let y = ['b', 'c', 'a'];

        let d = modified_hamming::<_, u8>(&x, &y, 1);
        assert_eq!(d, Some(3));
    }

    #[test]
    fn overflowing_mismatches() {
        let x = vec![0_u8; 200];
        let y = vec![1_u8; 200];

        assert_eq!(modified_hamming::<_, u8>(&x, &y, 1), Some(200));
        assert_eq!(modified_hamming::<_, u8>(&x, &y, 2), None);
        // free mismatches never overflow
        assert_eq!(modified_hamming::<_, u8>(&x, &y, 0), Some(0));
    }
}
