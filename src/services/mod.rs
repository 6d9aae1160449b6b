//! Market data collaborators: simulated quotes, histories and sentiment.

pub mod error;
pub mod market_data;
pub mod sentiment;

pub use error::MarketDataError;
pub use market_data::{MarketDataProvider, SimulatedMarketDataProvider};
pub use sentiment::market_sentiment;
