//! Unit tests for recommendation derivation

use stockscope::models::{Outlook, Signal, SignalStrength, SignalType};
use stockscope::signals::recommendation::{derive_outlook, derive_recommendation};

fn signal(signal_type: SignalType) -> Signal {
    Signal::new(signal_type, SignalStrength::Moderate, 100.0, "Test", "test")
}

#[test]
fn test_no_signals_is_neutral() {
    assert_eq!(derive_outlook(&[]), Outlook::Neutral);
    assert_eq!(
        derive_recommendation(&[]),
        "Neutral stance. Wait for clearer signals before making significant moves."
    );
}

#[test]
fn test_more_buys_is_bullish() {
    let signals = vec![signal(SignalType::Buy), signal(SignalType::Hold)];
    assert_eq!(derive_outlook(&signals), Outlook::Bullish);
    assert_eq!(
        derive_recommendation(&signals),
        "Overall bullish outlook. Consider accumulating on pullbacks."
    );
}

#[test]
fn test_more_sells_is_bearish() {
    let signals = vec![
        signal(SignalType::Sell),
        signal(SignalType::Hold),
        signal(SignalType::Hold),
    ];
    assert_eq!(derive_outlook(&signals), Outlook::Bearish);
    assert_eq!(
        derive_recommendation(&signals),
        "Bearish signals present. Consider reducing exposure or setting stop losses."
    );
}

#[test]
fn test_balanced_signals_are_neutral() {
    let signals = vec![
        signal(SignalType::Buy),
        signal(SignalType::Sell),
        signal(SignalType::Hold),
    ];
    assert_eq!(derive_outlook(&signals), Outlook::Neutral);
}

#[test]
fn test_holds_are_not_counted() {
    let signals = vec![signal(SignalType::Hold); 3];
    assert_eq!(derive_outlook(&signals), Outlook::Neutral);
}
