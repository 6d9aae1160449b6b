//! Discrete trading signals and the outlook derived from them

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Buy => "buy",
            SignalType::Sell => "sell",
            SignalType::Hold => "hold",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal conviction. Crossovers are `Strong`, oscillator and trend rules
/// `Moderate`; no current rule emits `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
}

impl SignalStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Strong => "strong",
            SignalStrength::Moderate => "moderate",
            SignalStrength::Weak => "weak",
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub strength: SignalStrength,
    pub price: f64,
    pub indicator: String,
    pub explanation: String,
}

impl Signal {
    pub fn new(
        signal_type: SignalType,
        strength: SignalStrength,
        price: f64,
        indicator: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            signal_type,
            strength,
            price,
            indicator: indicator.into(),
            explanation: explanation.into(),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.signal_type == SignalType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.signal_type == SignalType::Sell
    }
}

/// Summary stance from the balance of buy and sell signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Bullish,
    Bearish,
    Neutral,
}

impl Outlook {
    pub fn recommendation(&self) -> &'static str {
        match self {
            Outlook::Bullish => "Overall bullish outlook. Consider accumulating on pullbacks.",
            Outlook::Bearish => {
                "Bearish signals present. Consider reducing exposure or setting stop losses."
            }
            Outlook::Neutral => {
                "Neutral stance. Wait for clearer signals before making significant moves."
            }
        }
    }
}
