//! Trend indicators: SMA, trend classification

pub mod classification;
pub mod sma;

pub use classification::*;
pub use sma::*;
