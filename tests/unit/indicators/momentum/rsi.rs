//! Unit tests for RSI indicator

use chrono::NaiveDate;
use trendscope::config::SignalThresholds;
use trendscope::indicators::momentum::{calculate_rsi, RsiZone};
use trendscope::models::indicators::Series;

fn series_from(closes: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    Series::from_closes("TEST", start, closes)
}

#[test]
fn test_rsi_undefined_for_first_period_rows() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i % 5) as f64 - 2.0) * 1.5).collect();
    let series = series_from(&closes);
    let rsi = calculate_rsi(&series.candles, 14);

    assert_eq!(rsi.len(), 40);
    assert!(rsi[..14].iter().all(Option::is_none));
    assert!(rsi[14].is_some());
}

#[test]
fn test_rsi_known_value() {
    // 14 deltas: seven +2 and seven -1 => RS = 2, RSI = 66.67
    let mut closes = vec![50.0];
    for i in 0..14 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 2.0 } else { last - 1.0 });
    }
    let series = series_from(&closes);
    let rsi = calculate_rsi(&series.candles, 14);

    let value = rsi[14].unwrap();
    assert!((value - 200.0 / 3.0).abs() < 1e-9, "got {}", value);
}

#[test]
fn test_rsi_no_losses_is_undefined() {
    let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
    let series = series_from(&closes);
    assert!(calculate_rsi(&series.candles, 14).iter().all(Option::is_none));
}

#[test]
fn test_rsi_flat_series_is_undefined() {
    let series = series_from(&[10.0; 30]);
    assert!(calculate_rsi(&series.candles, 14).iter().all(Option::is_none));
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
    let series = series_from(&closes);
    let rsi = calculate_rsi(&series.candles, 14);
    for value in rsi.iter().skip(14) {
        assert_eq!(*value, Some(0.0));
    }
}

#[test]
fn test_rsi_range() {
    let closes = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 44.18, 44.22, 44.57,
        43.42, 42.66, 43.13, 45.01, 44.87, 43.95, 44.60,
    ];
    let series = series_from(&closes);
    let rsi = calculate_rsi(&series.candles, 14);
    let defined: Vec<f64> = rsi.iter().flatten().copied().collect();

    assert_eq!(defined.len(), closes.len() - 14);
    for v in defined {
        assert!((0.0..=100.0).contains(&v), "RSI {} out of range", v);
    }
}

#[test]
fn test_rsi_short_series() {
    let series = series_from(&[1.0, 2.0, 1.0]);
    assert_eq!(calculate_rsi(&series.candles, 14), vec![None, None, None]);
    assert!(calculate_rsi(&[], 14).is_empty());
}

#[test]
fn test_rsi_zone() {
    let thresholds = SignalThresholds::default();
    assert_eq!(RsiZone::classify(12.0, &thresholds), RsiZone::Oversold);
    assert_eq!(RsiZone::classify(30.0, &thresholds), RsiZone::Neutral);
    assert_eq!(RsiZone::classify(70.0, &thresholds), RsiZone::Neutral);
    assert_eq!(RsiZone::classify(85.0, &thresholds), RsiZone::Overbought);
}
