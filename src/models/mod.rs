//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod indicators;
pub mod market;
pub mod signal;

pub use analysis::TechnicalAnalysis;
pub use indicators::{MovingAverages, SupportResistance, Trend};
pub use market::{MarketBreadth, MarketSentiment, PricePoint, Quote, Sentiment, Timeframe};
pub use signal::{Outlook, Signal, SignalStrength, SignalType};
