//! Unit tests for support/resistance levels

use chrono::{TimeZone, Utc};
use stockscope::indicators::structure::{
    calculate_support_resistance, calculate_support_resistance_default,
};
use stockscope::models::{PricePoint, Timeframe};
use stockscope::services::SimulatedMarketDataProvider;

fn create_series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(format!("t{}", i), price, 1_000_000))
        .collect()
}

#[test]
fn test_empty_series_is_zero() {
    let levels = calculate_support_resistance_default(&[]);
    assert_eq!(levels.support, 0.0);
    assert_eq!(levels.resistance, 0.0);
}

#[test]
fn test_short_series_uses_all_points() {
    let levels = calculate_support_resistance_default(&create_series(&[5.0, 3.0, 9.0]));
    assert_eq!(levels.support, 3.0);
    assert_eq!(levels.resistance, 9.0);
}

#[test]
fn test_only_trailing_window_counts() {
    let mut prices = vec![1.0, 1000.0];
    prices.extend((0..20).map(|i| 50.0 + i as f64));
    let levels = calculate_support_resistance_default(&create_series(&prices));
    assert_eq!(levels.support, 50.0);
    assert_eq!(levels.resistance, 69.0);
}

#[test]
fn test_custom_lookback() {
    let series = create_series(&[10.0, 20.0, 30.0, 40.0]);
    let levels = calculate_support_resistance(&series, 2);
    assert_eq!(levels.support, 30.0);
    assert_eq!(levels.resistance, 40.0);
}

#[test]
fn test_levels_are_rounded() {
    let levels = calculate_support_resistance_default(&create_series(&[10.004, 12.346]));
    assert_eq!(levels.support, 10.0);
    assert_eq!(levels.resistance, 12.35);
}

#[test]
fn test_window_lies_between_support_and_resistance() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    for seed in 0..10 {
        let mut market = SimulatedMarketDataProvider::with_seed(seed);
        for timeframe in [Timeframe::OneDay, Timeframe::OneMonth, Timeframe::OneYear] {
            let series = market.historical_data_at("NVDA", timeframe, now).unwrap();
            let levels = calculate_support_resistance_default(&series);

            assert!(levels.support <= levels.resistance);
            for point in &series[series.len() - 20..] {
                assert!(levels.support <= point.price);
                assert!(point.price <= levels.resistance);
            }
        }
    }
}
