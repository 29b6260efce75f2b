//! Criterion benchmarks for the profanity filter.
//!
//! Covers the normalization pipeline, dictionary loading and matcher scans
//! at several thresholds.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use profanity::analysis::normalizer::Normalizer;
use profanity::dictionary::Dictionary;
use std::hint::black_box;
use std::sync::Arc;

/// Generate a synthetic dictionary resource.
fn generate_dictionary(count: usize) -> String {
    let stems = [
        "idiot", "moron", "bastard", "jerk", "dumbass", "loser", "scum", "twit", "prick", "wanker",
    ];
    let suffixes = ["", "s", "y", "ish", "er", "ed", "ing", "head", "face", "bag"];

    let mut resource = String::from("# synthetic dictionary\n");
    for i in 0..count {
        let stem = stems[i % stems.len()];
        let suffix = suffixes[(i / stems.len()) % suffixes.len()];
        resource.push_str(&format!("{stem}{suffix}{}\n", i / 100));
    }
    resource
}

/// Generate test texts, a few of them containing obfuscated terms.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "while", "everyone",
        "watches", "from", "a", "distance", "and", "nobody", "says", "anything",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let length = 20 + (i % 30);
        let mut text_words = Vec::with_capacity(length);
        for j in 0..length {
            text_words.push(words[(i * 7 + j * 13) % words.len()]);
        }
        if i % 10 == 0 {
            text_words.push("1d10t");
        }
        texts.push(text_words.join(" "));
    }
    texts
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = Normalizer::default();
    let texts = generate_test_texts(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_texts", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(normalizer.analyze(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_dictionary_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");

    let resource = generate_dictionary(1000);
    group.throughput(Throughput::Bytes(resource.len() as u64));
    group.bench_function("read_1000_terms", |b| {
        b.iter(|| Dictionary::read("en", black_box(resource.as_bytes())).unwrap())
    });

    group.finish();
}

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");

    let dictionary = Arc::new(Dictionary::read("en", generate_dictionary(1000).as_bytes()).unwrap());
    let texts = generate_test_texts(100);
    group.throughput(Throughput::Elements(texts.len() as u64));

    for threshold in [0.9, 0.8, 0.3] {
        let matcher = dictionary.matcher(threshold).unwrap();

        group.bench_function(format!("find_t{threshold}"), |b| {
            b.iter(|| {
                for text in &texts {
                    black_box(matcher.find(black_box(text)));
                }
            })
        });

        group.bench_function(format!("matches_t{threshold}"), |b| {
            b.iter(|| {
                for text in &texts {
                    black_box(matcher.matches(black_box(text)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_dictionary_load,
    bench_matcher
);

criterion_main!(benches);
