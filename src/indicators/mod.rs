//! Indicator calculators over an ordered price history.
//!
//! Every calculator is total: short or empty histories degrade to a defined
//! default rather than an error.

pub mod momentum;
pub mod structure;
pub mod trend;

pub use momentum::*;
pub use structure::*;
pub use trend::*;
