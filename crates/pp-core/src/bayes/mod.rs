//! Bag-of-words Bayesian text classification.
//!
//! Training counts tokens per class. Classification starts from a prior over
//! classes and folds in each token's per-class proportion as conditionally
//! independent evidence. Tokens no class has seen carry no evidence and are
//! skipped.

pub mod bag;
pub mod classifier;
pub mod label;

pub use bag::BagOfWords;
pub use classifier::{
    BayesTextClassifier, ClassifierError, Posterior, PosteriorMode, TraceStep, TracedPosterior,
};
pub use label::{Label, SpamLabel};
