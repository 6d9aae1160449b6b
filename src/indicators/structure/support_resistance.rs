//! Support and Resistance levels detection

use crate::common::math;
use crate::models::{PricePoint, SupportResistance};

pub const SUPPORT_RESISTANCE_LOOKBACK: usize = 20;

/// Calculate support and resistance levels
///
/// Support is the lowest and resistance the highest price over the trailing
/// `lookback` points (the whole series when shorter). Empty input yields 0/0.
pub fn calculate_support_resistance(series: &[PricePoint], lookback: usize) -> SupportResistance {
    let start = series.len().saturating_sub(lookback);
    let prices: Vec<f64> = series[start..].iter().map(|p| p.price).collect();

    match math::min_max(&prices) {
        Some((low, high)) => SupportResistance {
            support: math::round2(low),
            resistance: math::round2(high),
        },
        None => SupportResistance::default(),
    }
}

/// Calculate support/resistance with default lookback (20)
pub fn calculate_support_resistance_default(series: &[PricePoint]) -> SupportResistance {
    calculate_support_resistance(series, SUPPORT_RESISTANCE_LOOKBACK)
}
