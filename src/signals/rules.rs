//! Oscillator and trend rules evaluated on already computed indicators

use crate::common::math;
use crate::models::{Signal, SignalStrength, SignalType};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

pub const RSI_OVERBOUGHT_INDICATOR: &str = "RSI Overbought";
pub const RSI_OVERSOLD_INDICATOR: &str = "RSI Oversold";
pub const UPTREND_CONFIRMED_INDICATOR: &str = "Uptrend Confirmed";

/// RSI above 70 is a moderate sell, below 30 a moderate buy; the band itself is quiet
pub fn rsi_extremity_signal(rsi: f64, current_price: f64) -> Option<Signal> {
    if rsi > RSI_OVERBOUGHT {
        Some(Signal::new(
            SignalType::Sell,
            SignalStrength::Moderate,
            current_price,
            RSI_OVERBOUGHT_INDICATOR,
            format!(
                "RSI is at {}, indicating the stock is overbought. Consider taking profits or waiting for a pullback.",
                math::to_fixed(rsi, 1)
            ),
        ))
    } else if rsi < RSI_OVERSOLD {
        Some(Signal::new(
            SignalType::Buy,
            SignalStrength::Moderate,
            current_price,
            RSI_OVERSOLD_INDICATOR,
            format!(
                "RSI is at {}, indicating the stock is oversold. This could be a good buying opportunity as price may bounce back.",
                math::to_fixed(rsi, 1)
            ),
        ))
    } else {
        None
    }
}

/// Price above a rising 20/50 SMA stack confirms the uptrend.
///
/// There is intentionally no downtrend counterpart.
pub fn trend_confirmation_signal(current_price: f64, sma20: f64, sma50: f64) -> Option<Signal> {
    if current_price > sma20 && sma20 > sma50 {
        Some(Signal::new(
            SignalType::Hold,
            SignalStrength::Moderate,
            current_price,
            UPTREND_CONFIRMED_INDICATOR,
            "Price is above both 20-day and 50-day SMAs. The uptrend remains intact. Hold your position or add on dips.",
        ))
    } else {
        None
    }
}
