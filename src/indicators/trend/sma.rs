//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::{MovingAverages, PricePoint};

pub const SHORT_PERIOD: usize = 20;
pub const MEDIUM_PERIOD: usize = 50;
pub const LONG_PERIOD: usize = 200;

/// Calculate the SMA of the trailing `period` prices, rounded to 2 decimals
///
/// Histories shorter than `period` fall back to the latest price (0 when
/// empty) instead of failing.
pub fn calculate_sma(series: &[PricePoint], period: usize) -> f64 {
    if series.len() < period || period == 0 {
        return series.last().map(|p| p.price).unwrap_or(0.0);
    }

    let closes: Vec<f64> = series.iter().map(|p| p.price).collect();
    math::sma(&closes, period).map(math::round2).unwrap_or(0.0)
}

/// Calculate the 20/50/200 SMAs at once
pub fn calculate_moving_averages(series: &[PricePoint]) -> MovingAverages {
    MovingAverages {
        sma20: calculate_sma(series, SHORT_PERIOD),
        sma50: calculate_sma(series, MEDIUM_PERIOD),
        sma200: calculate_sma(series, LONG_PERIOD),
    }
}
