//! Market data error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unknown timeframe: {0} (expected one of 1D, 1W, 1M, 3M, 1Y)")]
    UnknownTimeframe(String),
}
