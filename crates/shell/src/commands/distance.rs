//! The edit distance between two strings or phrases.

use nem_distance::{sequences, Algorithm, Weights};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    x: &'a str,
    y: &'a str,
    phrase: bool,
    algorithm: Algorithm,
    weights: Weights<i64>,
    distance: i64,
}

/// Computes and prints the distance between `x` and `y`.
///
/// Characters are compared after trimming whitespace; phrases are compared
/// token by token.
pub fn run(x: &str, y: &str, algorithm: Algorithm, weights: Weights<i64>, phrase: bool, json: bool) -> Result<(), String> {
    let distance = if phrase {
        nem_distance::distance(&sequences::phrase(x), &sequences::phrase(y), algorithm, weights)
    } else {
        nem_distance::distance(
            &sequences::characters(x.trim()),
            &sequences::characters(y.trim()),
            algorithm,
            weights,
        )
    }
    .map_err(|e| e.to_string())?;

    ftlog::info!("{algorithm} distance between {x:?} and {y:?} with {weights:?} is {distance}");

    if json {
        let report = Report {
            x,
            y,
            phrase,
            algorithm,
            weights,
            distance,
        };
        println!("{}", serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?);
    } else {
        println!("{distance}");
    }

    Ok(())
}
