//! Regret minimization, exact evaluation and exploitability.
//!
//! # Sampling Variants
//!
//! | Variant | Walker Nodes | Opponent Nodes | Chance |
//! |---------|--------------|----------------|--------|
//! | [`Sampling::Chance`] | Explore all | Explore all | Sample one deal |
//! | [`Sampling::External`] | Explore all | Sample one | Sample one deal |
//!
//! Under chance sampling every decision node is a walker node, so both
//! players are updated on every traversal.

mod evaluator;
mod exploit;
mod sampling;
mod trainer;

pub use evaluator::*;
pub use sampling::*;
pub use trainer::*;
