//! 20/50 SMA crossover detection (Golden Cross / Death Cross)

use crate::indicators::trend::{calculate_sma, MEDIUM_PERIOD, SHORT_PERIOD};
use crate::models::{PricePoint, Signal, SignalStrength, SignalType};

pub const GOLDEN_CROSS: &str = "Golden Cross (20/50 SMA)";
pub const DEATH_CROSS: &str = "Death Cross (20/50 SMA)";

const GOLDEN_CROSS_EXPLANATION: &str = "The 20-day SMA has crossed above the 50-day SMA, indicating bullish momentum. This is a strong buy signal suggesting the start of an uptrend.";
const DEATH_CROSS_EXPLANATION: &str = "The 20-day SMA has crossed below the 50-day SMA, indicating bearish momentum. This is a strong sell signal suggesting potential downtrend.";

/// Direction of a moving-average crossover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

/// Compare the 20/50 SMAs now against the same pair with the newest point removed
pub fn crossover_type(series: &[PricePoint]) -> CrossoverType {
    if series.len() < MEDIUM_PERIOD {
        return CrossoverType::None;
    }

    let sma20 = calculate_sma(series, SHORT_PERIOD);
    let sma50 = calculate_sma(series, MEDIUM_PERIOD);

    let previous = &series[..series.len() - 1];
    let prev_sma20 = calculate_sma(previous, SHORT_PERIOD);
    let prev_sma50 = calculate_sma(previous, MEDIUM_PERIOD);

    if prev_sma20 < prev_sma50 && sma20 > sma50 {
        CrossoverType::Bullish
    } else if prev_sma20 > prev_sma50 && sma20 < sma50 {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Detect a Golden or Death Cross on the latest point
///
/// Needs at least 50 points; otherwise no signal is produced.
pub fn detect_sma_crossover(series: &[PricePoint], current_price: f64) -> Option<Signal> {
    match crossover_type(series) {
        CrossoverType::Bullish => Some(Signal::new(
            SignalType::Buy,
            SignalStrength::Strong,
            current_price,
            GOLDEN_CROSS,
            GOLDEN_CROSS_EXPLANATION,
        )),
        CrossoverType::Bearish => Some(Signal::new(
            SignalType::Sell,
            SignalStrength::Strong,
            current_price,
            DEATH_CROSS,
            DEATH_CROSS_EXPLANATION,
        )),
        CrossoverType::None => None,
    }
}
