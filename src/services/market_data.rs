//! Market data provider interface and the simulated feed behind it.
//!
//! The simulated provider stands in for a real data source: quotes drift by a
//! small random amount on every refresh and price histories are generated as
//! a random walk ending near the current quote.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::common::math;
use crate::models::{PricePoint, Quote, Timeframe};
use crate::services::error::MarketDataError;

/// Maximum relative move of a quote per refresh
const QUOTE_VOLATILITY: f64 = 0.015;
/// Width of the random volume change window, centred on zero
const QUOTE_VOLUME_JITTER: f64 = 1_000_000.0;

/// Per-step random range and drift of a generated history
const HISTORY_VOLATILITY: f64 = 0.02;
const HISTORY_DRIFT: f64 = 0.0002;
/// Histories start below the current quote and walk up towards it
const HISTORY_START_RATIO: f64 = 0.95;
const HISTORY_MIN_VOLUME: u64 = 1_000_000;
const HISTORY_MAX_VOLUME: u64 = 6_000_000;

pub trait MarketDataProvider {
    /// Refresh and return all listed quotes
    fn quotes(&mut self) -> Result<Vec<Quote>, MarketDataError>;

    /// Refresh quotes and return the one for `symbol`
    fn quote(&mut self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Get an ordered (oldest-to-newest) price history for a symbol
    fn historical_data(
        &mut self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}

pub struct SimulatedMarketDataProvider {
    quotes: Vec<Quote>,
    rng: StdRng,
}

impl SimulatedMarketDataProvider {
    /// Create a provider seeded from the OS entropy source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a provider whose output is reproducible for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            quotes: default_quotes(),
            rng,
        }
    }

    /// Current quotes without applying a refresh
    pub fn snapshot(&self) -> &[Quote] {
        &self.quotes
    }

    /// Apply one random fluctuation to every quote; the result becomes the new base
    pub fn refresh_quotes(&mut self) -> Vec<Quote> {
        for quote in self.quotes.iter_mut() {
            let change = (self.rng.random::<f64>() - 0.5) * 2.0 * QUOTE_VOLATILITY;
            let new_price = quote.price * (1.0 + change);
            let price_change = new_price - quote.price;
            let change_percent = (price_change / quote.price) * 100.0;
            let volume_delta = ((self.rng.random::<f64>() - 0.5) * QUOTE_VOLUME_JITTER).floor();

            quote.change = math::round2(price_change);
            quote.change_percent = math::round2(change_percent);
            quote.price = math::round2(new_price);
            quote.volume = (quote.volume as f64 + volume_delta).max(0.0) as u64;
        }

        debug!(count = self.quotes.len(), "Refreshed simulated quotes");
        self.quotes.clone()
    }

    /// Generate a history ending at `now`; exposed so callers can pin the clock
    pub fn historical_data_at(
        &mut self,
        symbol: &str,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let base_price = self
            .find(symbol)
            .map(|q| q.price)
            .ok_or_else(|| MarketDataError::UnknownSymbol(symbol.to_string()))?;

        let steps = timeframe.steps();
        let mut price = base_price * HISTORY_START_RATIO;
        let mut series = Vec::with_capacity(steps + 1);

        for i in (0..=steps).rev() {
            let change = (self.rng.random::<f64>() - 0.5) * HISTORY_VOLATILITY + HISTORY_DRIFT;
            price *= 1.0 + change;

            let time = now - timeframe.interval() * i as i32;
            series.push(PricePoint {
                time: time.format(timeframe.label_format()).to_string(),
                price: math::round2(price),
                volume: self
                    .rng
                    .random_range(HISTORY_MIN_VOLUME..HISTORY_MAX_VOLUME),
            });
        }

        debug!(
            symbol = %symbol,
            timeframe = %timeframe,
            points = series.len(),
            "Generated simulated price history"
        );
        Ok(series)
    }

    fn find(&self, symbol: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(symbol))
    }
}

impl Default for SimulatedMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataProvider for SimulatedMarketDataProvider {
    fn quotes(&mut self) -> Result<Vec<Quote>, MarketDataError> {
        Ok(self.refresh_quotes())
    }

    fn quote(&mut self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.refresh_quotes();
        self.find(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::UnknownSymbol(symbol.to_string()))
    }

    fn historical_data(
        &mut self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        self.historical_data_at(symbol, timeframe, Utc::now())
    }
}

fn quote(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
    market_cap: &str,
) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        volume,
        market_cap: market_cap.to_string(),
    }
}

/// Listed instruments and their opening quotes
pub fn default_quotes() -> Vec<Quote> {
    vec![
        quote("AAPL", "Apple Inc.", 178.45, 2.34, 1.33, 52_000_000, "2.8T"),
        quote("MSFT", "Microsoft Corp.", 412.89, -1.23, -0.30, 31_000_000, "3.1T"),
        quote("GOOGL", "Alphabet Inc.", 141.23, 0.87, 0.62, 28_000_000, "1.8T"),
        quote("AMZN", "Amazon.com Inc.", 178.92, 3.45, 1.97, 45_000_000, "1.9T"),
        quote("TSLA", "Tesla Inc.", 242.56, -5.67, -2.28, 98_000_000, "770B"),
        quote("NVDA", "NVIDIA Corp.", 875.34, 12.45, 1.44, 42_000_000, "2.2T"),
        quote("META", "Meta Platforms", 498.23, 8.12, 1.66, 24_000_000, "1.3T"),
        quote("BRK.B", "Berkshire Hathaway", 421.34, 1.23, 0.29, 3_500_000, "920B"),
    ]
}
