#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod edits;
pub mod metrics;
pub mod number;
pub mod sequences;

mod algorithm;
mod error;
mod strings;
mod tokenizer;

pub use algorithm::Algorithm;
pub use edits::{distance, Weights};
pub use error::DistanceError;
pub use number::Int;
pub use strings::{min_edit_distance, phrase_edit_distance, phrase_tokens_edit_distance};
pub use tokenizer::{is_word_char, tokenize, Tokens};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
