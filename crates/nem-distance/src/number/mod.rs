//! The `Int` trait is used to represent distances and edit weights.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
//!
//! Signed types are allowed for weights so that a negative weight can be
//! reported as an error instead of being unrepresentable.

mod _int;

pub use _int::Int;
