//! Market data records exchanged with the price producer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::error::MarketDataError;

/// One observation of an instrument's price history.
///
/// Histories are ordered oldest-to-newest; the last point is the current price.
/// `time` is a display label only and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(time: impl Into<String>, price: f64, volume: u64) -> Self {
        Self {
            time: time.into(),
            price,
            volume,
        }
    }
}

/// Latest quote for a listed instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: String,
}

/// History window requested from the market data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::OneYear => "1Y",
        }
    }

    /// Number of simulated steps; a history holds one more point than this
    pub fn steps(&self) -> usize {
        match self {
            Timeframe::OneDay => 78,
            Timeframe::OneWeek => 35,
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 60,
            Timeframe::OneYear => 252,
        }
    }

    /// Spacing between consecutive points
    pub fn interval(&self) -> chrono::Duration {
        match self {
            Timeframe::OneDay => chrono::Duration::minutes(5),
            Timeframe::OneWeek => chrono::Duration::hours(4),
            Timeframe::OneMonth | Timeframe::OneYear => chrono::Duration::hours(24),
            Timeframe::ThreeMonths => chrono::Duration::hours(36),
        }
    }

    /// Intraday windows are labelled by clock time, longer ones by date
    pub fn label_format(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "%I:%M %p",
            _ => "%b %-d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1D" => Ok(Timeframe::OneDay),
            "1W" => Ok(Timeframe::OneWeek),
            "1M" => Ok(Timeframe::OneMonth),
            "3M" => Ok(Timeframe::ThreeMonths),
            "1Y" => Ok(Timeframe::OneYear),
            _ => Err(MarketDataError::UnknownTimeframe(s.to_string())),
        }
    }
}

/// Overall market mood derived from advancing vs declining quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketBreadth {
    pub advancing: usize,
    pub declining: usize,
    pub unchanged: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub sentiment: Sentiment,
    pub score: f64,
    pub description: String,
    pub indicators: MarketBreadth,
}
