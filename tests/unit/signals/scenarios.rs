//! Market scenario tests for the full analysis pipeline

use chrono::NaiveDate;
use trendscope::core::analyzer::Analyzer;
use trendscope::models::indicators::Series;
use trendscope::models::signal::SignalKind;

fn series_from(closes: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    Series::from_closes("TEST", start, closes)
}

/// 25 days falling one point a day, five days drifting lower by 0.2, then a
/// two point rebound on the 31st day.
fn v_shaped_closes() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..25).map(|i| 100.0 - i as f64).collect();
    closes.extend_from_slice(&[75.8, 75.6, 75.4, 75.2, 75.0, 77.0]);
    closes
}

#[test]
fn test_flat_series() {
    let series = series_from(&[10.0; 60]);
    let report = Analyzer::default().analyze(&series).unwrap();
    let frame = report.frame();

    assert_eq!(frame.len(), 60);
    assert!(frame.ma_short().iter().all(Option::is_none)); // 80 > 60
    assert!(frame.ma_long().iter().all(Option::is_none));
    assert!(frame.rsi().iter().all(Option::is_none));
    assert!(frame.macd().iter().all(|v| *v == Some(0.0)));
    assert!(frame.signal().iter().all(|v| *v == Some(0.0)));
    assert!(frame.histogram().iter().all(|v| *v == Some(0.0)));
    assert!(report.signals().is_empty());
}

#[test]
fn test_flat_series_moving_averages_where_defined() {
    let series = series_from(&[10.0; 250]);
    let report = Analyzer::default().analyze(&series).unwrap();
    let frame = report.frame();

    assert_eq!(frame.ma_short().iter().flatten().count(), 171);
    assert_eq!(frame.ma_long().iter().flatten().count(), 51);
    assert!(frame.ma_short().iter().flatten().all(|&v| v == 10.0));
    assert!(frame.ma_long().iter().flatten().all(|&v| v == 10.0));
    assert!(report.signals().is_empty());
}

#[test]
fn test_v_shaped_dip_emits_single_buy() {
    let closes = v_shaped_closes();
    assert_eq!(closes.len(), 31);
    let series = series_from(&closes);
    let report = Analyzer::default().analyze(&series).unwrap();

    let signals = report.signals();
    assert_eq!(signals.len(), 1, "signals: {:?}", signals);
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].index, 30);
    assert_eq!(signals[0].price, 77.0);
    assert_eq!(signals[0].timestamp, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

    let rsi = report.frame().rsi()[30].unwrap();
    assert!(rsi < 30.0, "rsi {}", rsi);
}

#[test]
fn test_inverted_peak_emits_single_sell() {
    let closes: Vec<f64> = v_shaped_closes().iter().map(|c| 200.0 - c).collect();
    let series = series_from(&closes);
    let report = Analyzer::default().analyze(&series).unwrap();

    let signals = report.signals();
    assert_eq!(signals.len(), 1, "signals: {:?}", signals);
    assert_eq!(signals[0].kind, SignalKind::Sell);
    assert_eq!(signals[0].index, 30);
    assert!(report.frame().rsi()[30].unwrap() > 70.0);
}

#[test]
fn test_linear_decline_has_no_signal_despite_oversold_rsi() {
    let closes: Vec<f64> = (0..120).map(|i| 300.0 - i as f64).collect();
    let series = series_from(&closes);
    let report = Analyzer::default().analyze(&series).unwrap();

    // RSI pinned at zero the whole way down
    assert!(report.frame().rsi().iter().skip(14).all(|v| *v == Some(0.0)));
    assert!(report.signals().is_empty());
}

#[test]
fn test_short_series_is_degenerate_not_an_error() {
    let series = series_from(&[10.0, 10.5]);
    let report = Analyzer::default().analyze(&series).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.frame().rsi().iter().all(Option::is_none));
    assert!(report.frame().bb_middle().iter().all(Option::is_none));
    assert!(report.signals().is_empty());
}

#[test]
fn test_analysis_is_deterministic() {
    let closes: Vec<f64> = (0..300)
        .map(|i| 100.0 + (i as f64 * 0.21).sin() * 8.0 + (i as f64 * 0.05).cos() * 4.0)
        .collect();
    let series = series_from(&closes);
    let analyzer = Analyzer::default();

    let first = analyzer.analyze(&series).unwrap();
    let second = analyzer.analyze(&series).unwrap();
    assert_eq!(first, second);
}
