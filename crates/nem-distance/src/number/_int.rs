//! An `Int` is a primitive integer in which edit distances are accumulated.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Edit distances and edit weights are represented as `Int`s.
///
/// All arithmetic is checked. A distance that does not fit in the chosen type
/// is reported as `None` by the edit functions rather than wrapping or
/// truncating.
pub trait Int: Copy + Ord + Hash + Default + Debug + Display + Send + Sync {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Converts a `usize` to `Self`, or `None` if it does not fit.
    fn try_from_usize(n: usize) -> Option<Self>;

    /// Addition that returns `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Multiplication that returns `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Whether the number is strictly less than zero.
    #[must_use]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

/// A macro to implement the `Int` trait for primitive types.
macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl Int for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn try_from_usize(n: usize) -> Option<Self> {
                    Self::try_from(n).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    }
}

impl_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
