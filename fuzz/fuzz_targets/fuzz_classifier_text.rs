//! Fuzz target for training and classifying arbitrary text.
//!
//! Any input either classifies to probabilities in [0, 1] or returns a
//! `ClassifierError`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pp_core::bayes::{BayesTextClassifier, PosteriorMode, SpamLabel};
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct Input {
    training: Vec<(bool, String)>,
    query: String,
    spam_prior: f64,
    independent: bool,
}

fuzz_target!(|input: Input| {
    let mut classifier = BayesTextClassifier::new();
    for (is_spam, text) in &input.training {
        let label = if *is_spam { SpamLabel::Spam } else { SpamLabel::Ham };
        classifier.observe_text(label, text);
    }

    let prior = BTreeMap::from([
        (SpamLabel::Spam, input.spam_prior),
        (SpamLabel::Ham, 1.0 - input.spam_prior),
    ]);
    let mode = if input.independent {
        PosteriorMode::Independent
    } else {
        PosteriorMode::Joint
    };

    if let Ok(posterior) = classifier.classify_text(&input.query, &prior, mode) {
        for p in posterior.probabilities.values() {
            assert!((0.0..=1.0).contains(p), "posterior {p} out of range");
        }
    }
});
