//! Analysis aggregator tying indicators and signal rules together.

pub mod engine;

pub use engine::{analyze_stock, AnalysisEngine};
