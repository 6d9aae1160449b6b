//! Technical analysis engine: indicators, signals, trend and range in one pass.

use tracing::debug;

use crate::indicators::momentum::calculate_rsi_default;
use crate::indicators::structure::calculate_support_resistance_default;
use crate::indicators::trend::{calculate_moving_averages, classify_trend};
use crate::models::{PricePoint, TechnicalAnalysis};
use crate::signals::{
    derive_recommendation, detect_sma_crossover, rsi_extremity_signal, trend_confirmation_signal,
};

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Analyze a price history; see [`analyze_stock`].
    pub fn analyze(symbol: &str, series: &[PricePoint]) -> TechnicalAnalysis {
        analyze_stock(symbol, series)
    }
}

/// Run the full analysis over an ordered (oldest-to-newest) price history.
///
/// Never fails: an empty history yields [`TechnicalAnalysis::insufficient_data`]
/// and short histories fall back to the indicator defaults. `symbol` is only
/// recorded in logs.
pub fn analyze_stock(symbol: &str, series: &[PricePoint]) -> TechnicalAnalysis {
    let Some(current) = series.last() else {
        debug!(symbol = %symbol, "No price history, returning empty analysis");
        return TechnicalAnalysis::insufficient_data();
    };
    let current_price = current.price;

    let moving_averages = calculate_moving_averages(series);
    let rsi = calculate_rsi_default(series);

    let signals: Vec<_> = [
        detect_sma_crossover(series, current_price),
        rsi_extremity_signal(rsi, current_price),
        trend_confirmation_signal(current_price, moving_averages.sma20, moving_averages.sma50),
    ]
    .into_iter()
    .flatten()
    .collect();

    let range = calculate_support_resistance_default(series);
    let trend = classify_trend(current_price, moving_averages.sma20, moving_averages.sma50);
    let recommendation = derive_recommendation(&signals).to_string();

    debug!(
        symbol = %symbol,
        points = series.len(),
        price = current_price,
        rsi = rsi,
        trend = %trend,
        signals = signals.len(),
        "Technical analysis complete"
    );

    TechnicalAnalysis {
        signals,
        moving_averages,
        rsi,
        trend,
        support: range.support,
        resistance: range.resistance,
        recommendation,
    }
}
