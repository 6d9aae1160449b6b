//! Aggregate result of one technical analysis run

use serde::{Deserialize, Serialize};

use super::indicators::{MovingAverages, Trend};
use super::signal::Signal;

pub const INSUFFICIENT_DATA: &str = "Insufficient data for analysis";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAnalysis {
    /// In detection order: crossover, RSI extremity, trend confirmation
    pub signals: Vec<Signal>,
    pub moving_averages: MovingAverages,
    pub rsi: f64,
    pub trend: Trend,
    pub support: f64,
    pub resistance: f64,
    pub recommendation: String,
}

impl TechnicalAnalysis {
    /// Zeroed result returned when there is no price history at all
    pub fn insufficient_data() -> Self {
        Self {
            signals: Vec::new(),
            moving_averages: MovingAverages::default(),
            rsi: 50.0,
            trend: Trend::Sideways,
            support: 0.0,
            resistance: 0.0,
            recommendation: INSUFFICIENT_DATA.to_string(),
        }
    }

    pub fn buy_count(&self) -> usize {
        self.signals.iter().filter(|s| s.is_buy()).count()
    }

    pub fn sell_count(&self) -> usize {
        self.signals.iter().filter(|s| s.is_sell()).count()
    }
}
