//! Overall recommendation from the balance of buy and sell signals

use crate::models::{Outlook, Signal};

/// Hold signals do not count toward either side
pub fn derive_outlook(signals: &[Signal]) -> Outlook {
    let buys = signals.iter().filter(|s| s.is_buy()).count();
    let sells = signals.iter().filter(|s| s.is_sell()).count();

    if buys > sells {
        Outlook::Bullish
    } else if sells > buys {
        Outlook::Bearish
    } else {
        Outlook::Neutral
    }
}

pub fn derive_recommendation(signals: &[Signal]) -> &'static str {
    derive_outlook(signals).recommendation()
}
