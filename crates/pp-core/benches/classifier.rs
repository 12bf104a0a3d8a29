//! Criterion benchmarks for the bag-of-words classifier.
//!
//! Training throughput and the per-token cost of both posterior modes on a
//! synthetic two-class corpus.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pp_core::bayes::{BayesTextClassifier, PosteriorMode, SpamLabel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

// ── Helpers ──────────────────────────────────────────────────────────

fn corpus(documents: usize, words: usize, vocabulary: u32) -> Vec<(SpamLabel, String)> {
    let mut rng = StdRng::seed_from_u64(3);
    (0..documents)
        .map(|i| {
            let label = if i % 2 == 0 { SpamLabel::Spam } else { SpamLabel::Ham };
            // Spam draws from the low half of the vocabulary more often.
            let text = (0..words)
                .map(|_| {
                    let skew = if label == SpamLabel::Spam { 2 } else { 1 };
                    let w = rng.random_range(0..vocabulary) / skew;
                    format!("w{w}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            (label, text)
        })
        .collect()
}

fn trained(vocabulary: u32) -> BayesTextClassifier<SpamLabel> {
    let mut classifier = BayesTextClassifier::new();
    classifier.train(corpus(200, 50, vocabulary));
    classifier
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_train(c: &mut Criterion) {
    let docs = corpus(200, 50, 500);
    let mut group = c.benchmark_group("train");
    group.throughput(Throughput::Elements(200 * 50));
    group.bench_function("200x50", |b| {
        b.iter(|| {
            let mut classifier = BayesTextClassifier::new();
            classifier.train(docs.iter().map(|(l, t)| (*l, t.as_str())));
            black_box(classifier)
        });
    });
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let classifier = trained(500);
    let prior = BTreeMap::from([(SpamLabel::Spam, 0.5), (SpamLabel::Ham, 0.5)]);
    let mut group = c.benchmark_group("classify");

    for tokens in [10usize, 100, 1000] {
        let query = corpus(1, tokens, 600).remove(0).1;
        group.throughput(Throughput::Elements(tokens as u64));
        for mode in [PosteriorMode::Joint, PosteriorMode::Independent] {
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), tokens),
                &query,
                |b, query| {
                    b.iter(|| black_box(classifier.classify_text(black_box(query), &prior, mode)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_train, bench_classify);
criterion_main!(benches);
