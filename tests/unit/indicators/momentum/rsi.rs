//! Unit tests for RSI indicator

use stockscope::indicators::momentum::{calculate_rsi, calculate_rsi_default, NEUTRAL_RSI};
use stockscope::models::PricePoint;

fn create_series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(format!("t{}", i), price, 1_000_000))
        .collect()
}

fn linear_series(count: usize, start: f64, step: f64) -> Vec<PricePoint> {
    let prices: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    create_series(&prices)
}

#[test]
fn test_rsi_insufficient_data_is_neutral() {
    assert_eq!(calculate_rsi_default(&[]), NEUTRAL_RSI);
    assert_eq!(calculate_rsi_default(&linear_series(14, 100.0, 1.0)), 50.0);
}

#[test]
fn test_rsi_minimum_history_is_computed() {
    // 15 points give exactly 14 deltas
    assert_eq!(calculate_rsi_default(&linear_series(15, 100.0, 1.0)), 100.0);
}

#[test]
fn test_rsi_monotonic_increase_is_100() {
    assert_eq!(calculate_rsi_default(&linear_series(40, 100.0, 0.5)), 100.0);
}

#[test]
fn test_rsi_monotonic_decrease_is_0() {
    assert_eq!(calculate_rsi_default(&linear_series(40, 200.0, -0.5)), 0.0);
}

#[test]
fn test_rsi_flat_window_is_100() {
    let series = create_series(&[100.0; 20]);
    assert_eq!(calculate_rsi_default(&series), 100.0);
}

#[test]
fn test_rsi_averages_over_full_period() {
    // 7 gains of +2 and 7 losses of -1: avg gain 1.0, avg loss 0.5, RS 2
    let mut prices = vec![100.0];
    for i in 0..14 {
        let last = *prices.last().unwrap();
        prices.push(if i % 2 == 0 { last + 2.0 } else { last - 1.0 });
    }
    let rsi = calculate_rsi_default(&create_series(&prices));
    assert_eq!(rsi, 66.67);
}

#[test]
fn test_rsi_only_uses_trailing_deltas() {
    // a large early drop falls outside the 14-delta window
    let mut prices = vec![500.0, 100.0];
    prices.extend((1..=14).map(|i| 100.0 + i as f64));
    assert_eq!(calculate_rsi_default(&create_series(&prices)), 100.0);
}

#[test]
fn test_rsi_custom_period() {
    // deltas: +4, -2, +4, -2 -> avg gain 2.0, avg loss 1.0 over 4
    let series = create_series(&[10.0, 14.0, 12.0, 16.0, 14.0]);
    assert_eq!(calculate_rsi(&series, 4), 66.67);
    assert_eq!(calculate_rsi(&series, 5), NEUTRAL_RSI);
}

#[test]
fn test_rsi_is_bounded() {
    let prices: Vec<f64> = (0..100)
        .map(|i| 100.0 + ((i * 37) % 11) as f64 - 5.0)
        .collect();
    let rsi = calculate_rsi_default(&create_series(&prices));
    assert!((0.0..=100.0).contains(&rsi));
}
