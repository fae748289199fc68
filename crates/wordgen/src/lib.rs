#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![doc = include_str!("../README.md")]

pub mod random_data;
pub mod random_edits;

pub use random_data::{phrase_pairs, random_phrase, random_string, random_word, word_pairs};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
