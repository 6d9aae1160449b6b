//! Market-wide sentiment from the share of advancing vs declining quotes

use crate::common::math;
use crate::models::{MarketBreadth, MarketSentiment, Quote, Sentiment};

pub const BULLISH_THRESHOLD: f64 = 20.0;
pub const BEARISH_THRESHOLD: f64 = -20.0;

pub fn market_breadth(quotes: &[Quote]) -> MarketBreadth {
    let advancing = quotes.iter().filter(|q| q.change > 0.0).count();
    let declining = quotes.iter().filter(|q| q.change < 0.0).count();
    MarketBreadth {
        advancing,
        declining,
        unchanged: quotes.len() - advancing - declining,
    }
}

/// Score is (advancing - declining) / total * 100, rounded to one decimal.
/// An empty quote list scores 0.
pub fn market_sentiment(quotes: &[Quote]) -> MarketSentiment {
    let breadth = market_breadth(quotes);
    let score = if quotes.is_empty() {
        0.0
    } else {
        (breadth.advancing as f64 - breadth.declining as f64) / quotes.len() as f64 * 100.0
    };

    let (sentiment, description) = if score > BULLISH_THRESHOLD {
        (
            Sentiment::Bullish,
            "Strong buying pressure across major stocks. Market momentum is positive.",
        )
    } else if score < BEARISH_THRESHOLD {
        (
            Sentiment::Bearish,
            "Selling pressure dominant. Market showing signs of weakness.",
        )
    } else {
        (
            Sentiment::Neutral,
            "Mixed signals. Market is consolidating with no clear direction.",
        )
    };

    MarketSentiment {
        sentiment,
        score: math::round_to(score, 1),
        description: description.to_string(),
        indicators: breadth,
    }
}
