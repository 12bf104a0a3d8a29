//! Probability playground math utilities.

pub mod math;

pub use math::stable::*;
pub use math::bayes_factor;
pub use math::binomial;
pub use math::birthday;
pub use math::consensus;
pub use math::sequential::*;
