//! Core math modules.

pub mod stable;
pub mod bayes_factor;
pub mod binomial;
pub mod birthday;
pub mod consensus;
pub mod sequential;
