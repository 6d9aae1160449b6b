//! Coarse trend classification from price position and SMA ordering

use crate::models::Trend;

/// Classify the trend from the current price and the 20/50 SMAs
///
/// Equality on either comparison falls through to `Sideways`.
pub fn classify_trend(current_price: f64, sma20: f64, sma50: f64) -> Trend {
    if sma20 > sma50 && current_price > sma20 {
        Trend::Uptrend
    } else if sma20 < sma50 && current_price < sma20 {
        Trend::Downtrend
    } else {
        Trend::Sideways
    }
}
