//! Edit distances over generic sequences.
//!
//! The elements of a sequence only need to be comparable for equality, so
//! the same functions work on the characters of a string and on the tokens of
//! a phrase. Distances are accumulated in any [`Int`] type.

mod damerau;
mod hamming;
mod levenshtein;

use serde::{Deserialize, Serialize};

use crate::{number::Int, Algorithm, DistanceError};

pub use damerau::damerau_levenshtein;
pub use hamming::modified_hamming;
pub use levenshtein::levenshtein;

/// The largest Damerau-Levenshtein table, in cells, that `distance` will
/// allocate.
pub const MAX_TABLE_CELLS: usize = 1 << 26;

/// The weights applied to each kind of edit.
///
/// Damerau-Levenshtein charges `substitute` for transpositions as well as for
/// substitutions. Modified Hamming only uses `substitute`, and `None` uses no
/// weights at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weights<U: Int> {
    /// The weight of an insertion or a deletion.
    pub add_delete: U,
    /// The weight of a substitution, or of a transposition.
    pub substitute: U,
}

impl<U: Int> Default for Weights<U> {
    fn default() -> Self {
        Self {
            add_delete: U::ONE,
            substitute: U::ONE,
        }
    }
}

impl<U: Int> Weights<U> {
    /// Creates a new set of weights.
    #[must_use]
    pub const fn new(add_delete: U, substitute: U) -> Self {
        Self { add_delete, substitute }
    }

    /// Checks that no weight is negative.
    ///
    /// # Errors
    ///
    /// * `DistanceError::InvalidWeight` naming the first negative weight.
    pub fn validate(&self) -> Result<(), DistanceError> {
        let named = [("add_delete", self.add_delete), ("substitute", self.substitute)];
        match named.into_iter().find(|(_, w)| w.is_negative()) {
            Some((name, value)) => Err(DistanceError::InvalidWeight {
                name,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Computes the edit distance between two sequences with the given
/// algorithm.
///
/// The weights are validated once, before any table is built. This is the
/// entry point for callers who supply their own weights or element types.
///
/// # Arguments
///
/// * `x` - The first sequence.
/// * `y` - The second sequence.
/// * `algorithm` - The algorithm to use.
/// * `weights` - The weights of the edit operations.
///
/// # Errors
///
/// * `DistanceError::InvalidWeight` if a weight is negative.
/// * `DistanceError::SequenceTooLong` if a Damerau-Levenshtein table would
///   have more than `MAX_TABLE_CELLS` cells.
/// * `DistanceError::Overflow` if the distance does not fit in `U`.
///
/// # Examples
///
/// ```
/// use nem_distance::{distance, Algorithm, Weights};
///
/// let x = "good".chars().collect::<Vec<_>>();
/// let y = "bad".chars().collect::<Vec<_>>();
///
/// let d: u16 = distance(&x, &y, Algorithm::Hamming, Weights::default()).unwrap();
/// assert_eq!(d, 4);
///
/// let bad = distance::<char, i32>(&x, &y, Algorithm::Levenshtein, Weights::new(-1, 1));
/// assert!(bad.is_err());
/// ```
pub fn distance<T: PartialEq, U: Int>(
    x: &[T],
    y: &[T],
    algorithm: Algorithm,
    weights: Weights<U>,
) -> Result<U, DistanceError> {
    weights.validate()?;

    let d = match algorithm {
        Algorithm::None => length_difference(x, y),
        Algorithm::Levenshtein => levenshtein(x, y, weights),
        Algorithm::Hamming => modified_hamming(x, y, weights.substitute),
        Algorithm::DamerauLevenshtein => {
            let cells = (x.len() + 1).saturating_mul(y.len() + 1);
            if cells > MAX_TABLE_CELLS {
                return Err(DistanceError::SequenceTooLong {
                    len_x: x.len(),
                    len_y: y.len(),
                    max_cells: MAX_TABLE_CELLS,
                });
            }
            damerau_levenshtein(x, y, weights)
        }
    };

    d.ok_or(DistanceError::Overflow {
        ty: core::any::type_name::<U>(),
    })
}

/// The absolute difference in the lengths of two sequences, or `None` if it
/// does not fit in `U`.
///
/// This is the distance for `Algorithm::None`; the contents of the sequences
/// are ignored.
///
/// # Examples
///
/// ```
/// use nem_distance::edits::length_difference;
///
/// let x = "ambidextrous".chars().collect::<Vec<_>>();
/// let y = "dextrose".chars().collect::<Vec<_>>();
///
/// assert_eq!(length_difference::<_, u8>(&x, &y), Some(4));
/// ```
#[must_use]
pub fn length_difference<T, U: Int>(x: &[T], y: &[T]) -> Option<U> {
    U::try_from_usize(x.len().abs_diff(y.len()))
}

/// One step of a recurrence: `cell + weight`. A `None` cell stands for a
/// value too large for `U` and stays `None`.
fn step<U: Int>(cell: Option<U>, weight: U) -> Option<U> {
    cell.and_then(|c| c.checked_add(weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_one() {
        let w = Weights::<u32>::default();
        assert_eq!(w, Weights::new(1, 1));
        assert!(w.validate().is_ok());
    }

    #[test]
    fn negative_weights_are_rejected() {
        let err = Weights::new(1_i32, -2).validate().unwrap_err();
        assert_eq!(
            err,
            DistanceError::InvalidWeight {
                name: "substitute",
                value: "-2".to_string()
            }
        );

        let x = ['a'];
        for algorithm in Algorithm::ALL {
            assert!(distance(&x, &x, algorithm, Weights::new(-1_i64, 1)).is_err());
        }
    }

    #[test]
    fn zero_weights_are_allowed() {
        let x = ['a', 'b'];
        let y = ['b', 'a', 'c'];
        let d: i32 = distance(&x, &y, Algorithm::Levenshtein, Weights::new(0, 0)).unwrap();
        // the base row and column are never weighted
        assert_eq!(d, 0);
    }

    #[test]
    fn oversized_damerau_is_rejected() {
        let x = vec![0_u8; 1 << 13];
        let y = vec![1_u8; 1 << 13];
        let err = distance::<_, usize>(&x, &y, Algorithm::DamerauLevenshtein, Weights::default()).unwrap_err();
        assert!(matches!(err, DistanceError::SequenceTooLong { .. }));

        // the other algorithms do not build a full table
        let d: usize = distance(&x, &y, Algorithm::Hamming, Weights::default()).unwrap();
        assert_eq!(d, 1 << 13);
    }

    #[test]
    fn huge_weights_overflow() {
        let overflow = |ty| Err(DistanceError::Overflow { ty });

        let d = distance(&['a'], &['b'], Algorithm::Levenshtein, Weights::new(u32::MAX, 1));
        // substituting is still cheap enough
        assert_eq!(d, Ok(1));

        let d = distance(&['a'], &['b'], Algorithm::Levenshtein, Weights::new(u32::MAX, u32::MAX));
        assert_eq!(d, Ok(u32::MAX));

        let d = distance(&['a', 'b'], &['b', 'a'], Algorithm::Hamming, Weights::new(1_i64, i64::MAX));
        assert_eq!(d, overflow("i64"));

        let d = distance(&['a', 'b'], &['b', 'a'], Algorithm::DamerauLevenshtein, Weights::new(1_i64, i64::MAX));
        // a deletion and an insertion instead of the dear transposition
        assert_eq!(d, Ok(2));

        let d = distance(&['a', 'b'], &['c', 'd'], Algorithm::Levenshtein, Weights::new(i64::MAX, i64::MAX));
        assert_eq!(d, overflow("i64"));
    }

    #[test]
    fn narrow_results_overflow() {
        let long = vec!['a'; 300];
        let empty: Vec<char> = Vec::new();

        for algorithm in Algorithm::ALL {
            assert_eq!(
                distance::<_, u8>(&long, &empty, algorithm, Weights::default()),
                Err(DistanceError::Overflow { ty: "u8" }),
                "{algorithm}"
            );
            assert!(matches!(
                distance::<_, i8>(&long, &empty, algorithm, Weights::default()),
                Err(DistanceError::Overflow { .. })
            ));
            assert_eq!(distance::<_, u16>(&long, &empty, algorithm, Weights::default()), Ok(300));
        }

        // a wide base row does not matter when the answer itself is small
        let mut near = long.clone();
        near[7] = 'b';
        assert_eq!(distance::<_, u8>(&long, &near, Algorithm::Levenshtein, Weights::default()), Ok(1));
        assert_eq!(distance::<_, u8>(&long, &near, Algorithm::DamerauLevenshtein, Weights::default()), Ok(1));
        assert_eq!(distance::<_, u8>(&long, &near, Algorithm::Hamming, Weights::default()), Ok(1));
    }
}
