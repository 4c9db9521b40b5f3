//! Unit tests for signal engine

use chrono::NaiveDate;
use trendscope::config::SignalThresholds;
use trendscope::models::frame::IndicatorFrame;
use trendscope::models::indicators::Series;
use trendscope::models::signal::SignalKind;
use trendscope::signals::engine::SignalEngine;

fn series_from(closes: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    Series::from_closes("TEST", start, closes)
}

fn frame_with(series: &Series, macd: &[f64], signal: &[f64], rsi: &[Option<f64>]) -> IndicatorFrame {
    let mut frame = IndicatorFrame::new(series.timestamps());
    let hist = macd.iter().zip(signal).map(|(m, s)| Some(m - s)).collect();
    frame.set_macd(
        macd.iter().copied().map(Some).collect(),
        signal.iter().copied().map(Some).collect(),
        hist,
    );
    frame.set_rsi(rsi.to_vec());
    frame
}

#[test]
fn test_buy_on_upward_cross_when_oversold() {
    let series = series_from(&[10.0, 9.0, 9.5]);
    let frame = frame_with(&series, &[-1.0, -0.5, 0.2], &[0.0, -0.2, 0.0], &[None, Some(20.0), Some(25.0)]);

    let signals = SignalEngine::default().detect(&series, &frame);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].index, 2);
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].price, 9.5);
    assert_eq!(signals[0].timestamp, series.candles[2].timestamp);
}

#[test]
fn test_sell_on_downward_cross_when_overbought() {
    let series = series_from(&[10.0, 11.0, 10.5]);
    let frame = frame_with(&series, &[1.0, 0.5, -0.1], &[0.0, 0.2, 0.0], &[None, Some(80.0), Some(75.0)]);

    let signals = SignalEngine::default().detect(&series, &frame);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::Sell);
    assert_eq!(signals[0].index, 2);
}

#[test]
fn test_cross_without_rsi_filter_is_ignored() {
    let series = series_from(&[10.0, 9.0, 9.5]);
    let frame = frame_with(&series, &[-1.0, -0.5, 0.2], &[0.0, -0.2, 0.0], &[None, Some(45.0), Some(45.0)]);
    assert!(SignalEngine::default().detect(&series, &frame).is_empty());
}

#[test]
fn test_undefined_rsi_blocks_signal() {
    let series = series_from(&[10.0, 9.0, 9.5]);
    let frame = frame_with(&series, &[-1.0, -0.5, 0.2], &[0.0, -0.2, 0.0], &[None, None, None]);
    assert!(SignalEngine::default().detect(&series, &frame).is_empty());
}

#[test]
fn test_custom_thresholds() {
    let series = series_from(&[10.0, 9.0, 9.5]);
    let frame = frame_with(&series, &[-1.0, -0.5, 0.2], &[0.0, -0.2, 0.0], &[None, Some(40.0), Some(40.0)]);
    let engine = SignalEngine::new(SignalThresholds {
        oversold: 45.0,
        overbought: 55.0,
    });
    let signals = engine.detect(&series, &frame);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::Buy);
}

#[test]
fn test_multiple_signals_in_index_order() {
    let series = series_from(&[10.0, 9.0, 9.5, 10.5, 10.0, 9.0, 9.5]);
    let macd = [-1.0, -0.5, 0.2, 0.5, -0.1, -0.6, 0.1];
    let signal = [0.0, -0.2, 0.0, 0.1, 0.0, -0.3, 0.0];
    let rsi = [None, Some(20.0), Some(25.0), Some(60.0), Some(75.0), Some(40.0), Some(28.0)];
    let frame = frame_with(&series, &macd, &signal, &rsi);

    let signals = SignalEngine::default().detect(&series, &frame);
    let found: Vec<(usize, SignalKind)> = signals.iter().map(|s| (s.index, s.kind)).collect();
    assert_eq!(found, vec![(2, SignalKind::Buy), (4, SignalKind::Sell), (6, SignalKind::Buy)]);
}

#[test]
fn test_first_row_never_signals() {
    let series = series_from(&[10.0]);
    let frame = frame_with(&series, &[1.0], &[0.0], &[Some(10.0)]);
    let engine = SignalEngine::default();
    assert_eq!(engine.evaluate_at(&frame, 0), None);
    assert!(engine.detect(&series, &frame).is_empty());
}
