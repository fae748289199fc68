//! Timing edit distances over synthetic data.

use std::time::Instant;

use nem_distance::Algorithm;
use rayon::prelude::*;

/// Generates `pairs` random pairs and times the distance over all of them.
#[allow(clippy::cast_precision_loss)]
pub fn run(pairs: usize, algorithm: Algorithm, phrase: bool, parallel: bool, seed: u64) -> Result<(), String> {
    let kind = if phrase { "phrase" } else { "word" };
    let data = if phrase {
        wordgen::phrase_pairs(pairs, seed)
    } else {
        wordgen::word_pairs(pairs, seed)
    };
    ftlog::info!("Generated {pairs} {kind} pairs with seed {seed}");

    let measure = |(x, y): &(String, String)| {
        if phrase {
            nem_distance::phrase_edit_distance(x, y, algorithm)
        } else {
            nem_distance::min_edit_distance(x, y, algorithm)
        }
    };

    let start = Instant::now();
    let distances = if parallel {
        data.par_iter().map(measure).collect::<Result<Vec<_>, _>>()
    } else {
        data.iter().map(measure).collect::<Result<Vec<_>, _>>()
    }
    .map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    let total = distances.iter().sum::<usize>();
    let mean = if distances.is_empty() { 0.0 } else { total as f64 / distances.len() as f64 };
    ftlog::info!(
        "{algorithm} over {pairs} {kind} pairs (parallel: {parallel}) took {:.6} seconds, mean distance {mean:.3}",
        elapsed.as_secs_f64()
    );
    println!("{pairs} {kind} pairs, {algorithm}: {:.6} s, mean distance {mean:.3}", elapsed.as_secs_f64());

    Ok(())
}
