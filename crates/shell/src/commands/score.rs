//! Percentage scores of an actual text against an expected one.

use nem_distance::{metrics, Algorithm, DistanceError};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    expected: &'a str,
    actual: &'a str,
    phrase: bool,
    algorithm: Algorithm,
    similarity: f64,
    error: f64,
    accuracy: f64,
}

/// Prints the similarity, error and accuracy of `actual` against `expected`.
pub fn run(expected: &str, actual: &str, algorithm: Algorithm, phrase: bool, json: bool) -> Result<(), String> {
    let scores = if phrase {
        scores(
            expected,
            actual,
            algorithm,
            metrics::phrase_similarity_percentage,
            metrics::phrase_error_percentage,
            metrics::phrase_accuracy_percentage,
        )
    } else {
        scores(
            expected,
            actual,
            algorithm,
            metrics::similarity_percentage,
            metrics::error_percentage,
            metrics::accuracy_percentage,
        )
    };
    let (similarity, error, accuracy) = scores.map_err(|e| e.to_string())?;

    ftlog::info!("{algorithm} scores of {actual:?} against {expected:?}: {similarity:.2}% similar, {error:.2}% error, {accuracy:.2}% accurate");

    if json {
        let report = Report {
            expected,
            actual,
            phrase,
            algorithm,
            similarity,
            error,
            accuracy,
        };
        println!("{}", serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?);
    } else {
        println!("similarity: {similarity:.2}%");
        println!("error:      {error:.2}%");
        println!("accuracy:   {accuracy:.2}%");
    }

    Ok(())
}

type Score = fn(&str, &str, Algorithm) -> Result<f64, DistanceError>;

fn scores(
    expected: &str,
    actual: &str,
    algorithm: Algorithm,
    similarity: Score,
    error: Score,
    accuracy: Score,
) -> Result<(f64, f64, f64), DistanceError> {
    Ok((
        similarity(expected, actual, algorithm)?,
        error(expected, actual, algorithm)?,
        accuracy(expected, actual, algorithm)?,
    ))
}
