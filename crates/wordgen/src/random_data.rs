//! Generate random words and phrases for use in benchmarks and tests.

use rand::prelude::*;

/// The letters words are drawn from.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// The shortest and longest random word.
pub const WORD_LEN: (usize, usize) = (3, 9);

/// The fewest and most words in a random phrase.
pub const PHRASE_LEN: (usize, usize) = (3, 100);

/// Generate a randomized dataset of strings.
///
/// # Arguments:
///
/// * `cardinality`: number of strings to generate.
/// * `min_len`: minimum length of any string
/// * `max_len`: maximum length of any string
/// * `alphabet`: the alphabet from which to draw characters
/// * `seed`: for the random number generator
///
/// An empty alphabet produces empty strings. If `min_len` exceeds `max_len`
/// the two bounds are swapped.
#[must_use]
pub fn random_string(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let (min_len, max_len) = (min_len.min(max_len), min_len.max(max_len));
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len).filter_map(|_| alphabet.choose(&mut rng)).collect::<String>()
        })
        .collect()
}

/// A random lowercase word of three to nine letters.
pub fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(WORD_LEN.0..=WORD_LEN.1);
    (0..len)
        .map(|_| char::from(LETTERS.as_bytes()[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

/// A phrase of three to one hundred random words separated by single spaces
/// and ended by a period, so that every word is a complete token.
pub fn random_phrase<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(PHRASE_LEN.0..=PHRASE_LEN.1);
    let mut phrase = (0..len).map(|_| random_word(rng)).collect::<Vec<_>>().join(" ");
    phrase.push('.');
    phrase
}

/// `count` pairs of random words.
///
/// # Arguments:
///
/// * `count`: number of pairs to generate.
/// * `seed`: for the random number generator
#[must_use]
pub fn word_pairs(count: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (random_word(&mut rng), random_word(&mut rng)))
        .collect()
}

/// `count` pairs of random phrases.
///
/// # Arguments:
///
/// * `count`: number of pairs to generate.
/// * `seed`: for the random number generator
#[must_use]
pub fn phrase_pairs(count: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (random_phrase(&mut rng), random_phrase(&mut rng)))
        .collect()
}
