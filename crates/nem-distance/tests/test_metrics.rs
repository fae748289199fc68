use float_cmp::approx_eq;
use nem_distance::{
    metrics::{
        accuracy_percentage, error_percentage, phrase_accuracy_percentage, phrase_error_percentage,
        phrase_error_percentage_tokens, similarity_percentage,
    },
    Algorithm,
};

const PEOPLE: (&str, &str) = (
    "We the people of the United States.",
    "We the people the of United States.",
);

#[test]
fn characters() {
    let error = error_percentage("kitten", "sitting", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, error, 50.0));

    let accuracy = accuracy_percentage("kitten", "sitting", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, accuracy, 50.0));

    let similarity = similarity_percentage("kitten", "sitting", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, similarity, 100.0 - 300.0 / 7.0, ulps = 4));

    // trimming happens before lengths are measured
    let padded = similarity_percentage("  kitten ", "sitting\n", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, padded, similarity));
}

#[test]
fn similarity_is_symmetric() {
    for algorithm in Algorithm::ALL {
        let forward = similarity_percentage("ambidextrous", "dextrose", algorithm).unwrap();
        let backward = similarity_percentage("dextrose", "ambidextrous", algorithm).unwrap();
        assert!(approx_eq!(f64, forward, backward), "{algorithm}");
    }
}

#[test]
fn error_can_exceed_one_hundred() {
    let error = error_percentage("ab", "abcdefgh", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, error, 300.0));

    let accuracy = accuracy_percentage("ab", "abcdefgh", Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, accuracy, -200.0));
}

#[test]
fn phrases() {
    let (expected, actual) = PEOPLE;

    let error = phrase_error_percentage(expected, actual, Algorithm::DamerauLevenshtein).unwrap();
    assert!(approx_eq!(f64, error, 100.0 / 7.0, ulps = 4));

    let accuracy = phrase_accuracy_percentage(expected, actual, Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, accuracy, 100.0 - 200.0 / 7.0, ulps = 4));
}

#[test]
fn custom_tokens() {
    let expected = ["a", "b", "c", "d"];
    let actual = ["a", "c", "b", "d"];

    let error = phrase_error_percentage_tokens(&expected, &actual, Algorithm::Levenshtein).unwrap();
    assert!(approx_eq!(f64, error, 50.0));

    let error = phrase_error_percentage_tokens(&expected, &actual, Algorithm::DamerauLevenshtein).unwrap();
    assert!(approx_eq!(f64, error, 25.0));
}
