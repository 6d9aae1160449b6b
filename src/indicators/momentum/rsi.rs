//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::PricePoint;

pub const RSI_PERIOD: usize = 14;

/// Returned when the history is too short to measure momentum
pub const NEUTRAL_RSI: f64 = 50.0;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses over the trailing `period` deltas are both averaged over
/// `period`, not over the number of up or down moves. Histories shorter than
/// `period + 1` points read as neutral (50), and a window without losses reads
/// as 100.
pub fn calculate_rsi(series: &[PricePoint], period: usize) -> f64 {
    if series.len() < period + 1 {
        return NEUTRAL_RSI;
    }

    let deltas: Vec<f64> = series
        .windows(2)
        .map(|pair| pair[1].price - pair[0].price)
        .collect();
    let recent = &deltas[deltas.len() - period..];

    let gains: f64 = recent.iter().filter(|&&d| d > 0.0).sum();
    let losses: f64 = recent.iter().filter(|&&d| d < 0.0).map(|d| d.abs()).sum();

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    math::round2(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &[PricePoint]) -> f64 {
    calculate_rsi(series, RSI_PERIOD)
}
