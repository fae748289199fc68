#![allow(missing_docs)]

use std::hint::black_box;

use criterion::*;
use wordgen::random_data;

use nem_distance::{phrase_edit_distance, tokenize, Algorithm};

fn tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenize");

    let phrases = random_data::phrase_pairs(100, 42);
    let bytes = phrases.iter().map(|(x, y)| x.len() + y.len()).sum::<usize>();
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("phrase-pairs", |b| {
        b.iter(|| {
            phrases
                .iter()
                .map(|(x, y)| black_box(tokenize(x).count() + tokenize(y).count()))
                .sum::<usize>()
        });
    });
    group.finish();
}

fn phrase_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("PhrasePairs");
    group.sample_size(20);

    let cardinality = 100;
    let phrases = random_data::phrase_pairs(cardinality, 42);
    group.throughput(Throughput::Elements(cardinality as u64));

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                phrases
                    .iter()
                    .map(|(x, y)| black_box(phrase_edit_distance(x, y, algorithm)))
                    .collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, tokenizer, phrase_pairs);
criterion_main!(benches);
