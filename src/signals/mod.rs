//! Signal detection rules.

pub mod crossover;
pub mod recommendation;
pub mod rules;

pub use crossover::*;
pub use recommendation::*;
pub use rules::*;
