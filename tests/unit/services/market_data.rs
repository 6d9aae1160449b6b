//! Unit tests for the simulated market data provider

use chrono::{TimeZone, Utc};
use stockscope::models::Timeframe;
use stockscope::services::market_data::default_quotes;
use stockscope::services::{MarketDataError, MarketDataProvider, SimulatedMarketDataProvider};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap()
}

fn is_two_decimal(value: f64) -> bool {
    ((value * 100.0).round() / 100.0 - value).abs() < 1e-9
}

#[test]
fn test_history_length_per_timeframe() {
    let mut market = SimulatedMarketDataProvider::with_seed(7);
    let expected = [
        (Timeframe::OneDay, 79),
        (Timeframe::OneWeek, 36),
        (Timeframe::OneMonth, 31),
        (Timeframe::ThreeMonths, 61),
        (Timeframe::OneYear, 253),
    ];
    for (timeframe, len) in expected {
        let series = market.historical_data_at("AAPL", timeframe, fixed_now()).unwrap();
        assert_eq!(series.len(), len, "timeframe {}", timeframe);
    }
}

#[test]
fn test_history_is_reproducible_with_seed() {
    let mut a = SimulatedMarketDataProvider::with_seed(42);
    let mut b = SimulatedMarketDataProvider::with_seed(42);
    let first = a.historical_data_at("MSFT", Timeframe::OneYear, fixed_now()).unwrap();
    let second = b.historical_data_at("MSFT", Timeframe::OneYear, fixed_now()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_history_values_are_well_formed() {
    let mut market = SimulatedMarketDataProvider::with_seed(3);
    let series = market
        .historical_data_at("TSLA", Timeframe::OneYear, fixed_now())
        .unwrap();

    for point in &series {
        assert!(point.price > 0.0);
        assert!(is_two_decimal(point.price));
        assert!((1_000_000..6_000_000).contains(&point.volume));
    }
}

#[test]
fn test_history_walks_from_below_the_quote() {
    let mut market = SimulatedMarketDataProvider::with_seed(11);
    let series = market
        .historical_data_at("AAPL", Timeframe::OneDay, fixed_now())
        .unwrap();
    // 95% of 178.45, moved at most 1.02% on the first step
    let start = 178.45 * 0.95;
    assert!((series[0].price - start).abs() <= start * 0.0102 + 0.01);
}

#[test]
fn test_history_labels() {
    let mut market = SimulatedMarketDataProvider::with_seed(1);

    let intraday = market
        .historical_data_at("AAPL", Timeframe::OneDay, fixed_now())
        .unwrap();
    assert_eq!(intraday.last().unwrap().time, "04:00 PM");
    assert_eq!(intraday[intraday.len() - 2].time, "03:55 PM");

    let daily = market
        .historical_data_at("AAPL", Timeframe::OneMonth, fixed_now())
        .unwrap();
    assert_eq!(daily.last().unwrap().time, "Mar 15");
    assert_eq!(daily[0].time, "Feb 14");
}

#[test]
fn test_unknown_symbol() {
    let mut market = SimulatedMarketDataProvider::with_seed(1);
    let err = market
        .historical_data("NOPE", Timeframe::OneDay)
        .unwrap_err();
    assert_eq!(err, MarketDataError::UnknownSymbol("NOPE".to_string()));

    assert!(matches!(
        market.quote("NOPE"),
        Err(MarketDataError::UnknownSymbol(_))
    ));
}

#[test]
fn test_refresh_keeps_moves_small() {
    let mut market = SimulatedMarketDataProvider::with_seed(5);
    let before = market.snapshot().to_vec();
    let after = market.refresh_quotes();

    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(old.symbol, new.symbol);
        assert!((new.price - old.price).abs() <= old.price * 0.015 + 0.01);
        assert!((new.change - (new.price - old.price)).abs() <= 0.011);
        assert!(is_two_decimal(new.price));
        assert!(is_two_decimal(new.change_percent));
        assert!(new.volume.abs_diff(old.volume) <= 500_000);
    }
    assert_eq!(market.snapshot(), after.as_slice());
}

#[test]
fn test_quotes_refresh_every_call() {
    let mut market = SimulatedMarketDataProvider::with_seed(9);
    let first = market.quotes().unwrap();
    let second = market.quotes().unwrap();
    assert_eq!(first.len(), 8);
    assert_ne!(first, second);
}

#[test]
fn test_quote_lookup_is_case_insensitive() {
    let mut market = SimulatedMarketDataProvider::with_seed(2);
    let quote = market.quote("brk.b").unwrap();
    assert_eq!(quote.symbol, "BRK.B");
    assert_eq!(quote.name, "Berkshire Hathaway");
}

#[test]
fn test_default_quotes() {
    let quotes = default_quotes();
    let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(
        symbols,
        vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META", "BRK.B"]
    );
}

#[test]
fn test_timeframe_parsing() {
    assert_eq!("3M".parse::<Timeframe>().unwrap(), Timeframe::ThreeMonths);
    assert_eq!("1d".parse::<Timeframe>().unwrap(), Timeframe::OneDay);
    assert_eq!(" 1Y ".parse::<Timeframe>().unwrap(), Timeframe::OneYear);
    assert!(matches!(
        "5Y".parse::<Timeframe>(),
        Err(MarketDataError::UnknownTimeframe(_))
    ));
}
