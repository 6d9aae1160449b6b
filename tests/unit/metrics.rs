//! Unit tests for prometheus metrics

use stockscope::analysis::analyze_stock;
use stockscope::metrics::Metrics;
use stockscope::models::PricePoint;

#[test]
fn test_export_lists_registered_metrics() {
    let metrics = Metrics::new().expect("metrics initialization");
    metrics.http_requests_total.inc();
    let body = metrics.export().unwrap();
    assert!(body.contains("http_requests_total 1"));
    assert!(body.contains("http_requests_in_flight"));
    assert!(body.contains("http_request_duration_seconds"));
}

#[test]
fn test_record_analysis() {
    let metrics = Metrics::new().unwrap();
    let series: Vec<PricePoint> = (0..60)
        .map(|i| PricePoint::new(format!("t{}", i), 100.0 + i as f64, 1_000))
        .collect();
    let analysis = analyze_stock("AAPL", &series);
    metrics.record_analysis(&analysis);

    assert_eq!(
        metrics
            .analyses_total
            .with_label_values(&["uptrend"])
            .get(),
        1
    );
    assert_eq!(
        metrics
            .signals_emitted_total
            .with_label_values(&["sell", "moderate"])
            .get(),
        1
    );
    assert_eq!(
        metrics
            .signals_emitted_total
            .with_label_values(&["hold", "moderate"])
            .get(),
        1
    );
    let body = metrics.export().unwrap();
    assert!(body.contains("analyses_total{trend=\"uptrend\"} 1"));
}
