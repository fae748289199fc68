//! Errors raised at the boundary of the distance engine and the metrics.

use core::fmt;

/// The reasons a distance or percentage cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// A weight was negative.
    InvalidWeight {
        /// Which weight was rejected.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
    },
    /// A percentage was requested against a reference of length zero.
    EmptyReference,
    /// The Damerau-Levenshtein table for these sequences would be too large.
    SequenceTooLong {
        /// Length of the first sequence.
        len_x: usize,
        /// Length of the second sequence.
        len_y: usize,
        /// Maximum allowed number of table cells.
        max_cells: usize,
    },
    /// The distance is too large for the integer type it is computed in.
    Overflow {
        /// The name of the integer type.
        ty: &'static str,
    },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight { name, value } => {
                write!(f, "weight `{name}` must be non-negative, got {value}")
            }
            Self::EmptyReference => write!(f, "cannot compute a percentage against an empty reference"),
            Self::SequenceTooLong { len_x, len_y, max_cells } => write!(
                f,
                "sequences of lengths {len_x} and {len_y} exceed the table limit of {max_cells} cells"
            ),
            Self::Overflow { ty } => write!(f, "edit distance does not fit in `{ty}`"),
        }
    }
}

impl std::error::Error for DistanceError {}
