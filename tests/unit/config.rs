//! Unit tests for engine configuration

use trendscope::config::{EngineConfig, SignalThresholds};
use trendscope::error::EngineError;

#[test]
fn test_engine_config_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.macd_fast_span, 12);
    assert_eq!(config.macd_slow_span, 26);
    assert_eq!(config.macd_signal_span, 9);
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.ma_short_window, 80);
    assert_eq!(config.ma_long_window, 200);
    assert_eq!(config.bollinger_window, 20);
    assert_eq!(config.bollinger_multiplier, 2.0);
    assert_eq!(config.thresholds, SignalThresholds { oversold: 30.0, overbought: 70.0 });
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_window_rejected() {
    let config = EngineConfig {
        rsi_period: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(msg)) if msg.contains("rsi_period")));
}

#[test]
fn test_fast_span_must_be_below_slow_span() {
    let config = EngineConfig {
        macd_fast_span: 26,
        macd_slow_span: 12,
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_thresholds_must_be_ordered() {
    let config = EngineConfig {
        thresholds: SignalThresholds {
            oversold: 70.0,
            overbought: 30.0,
        },
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());

    let config = EngineConfig {
        bollinger_multiplier: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_json_config_fills_defaults() {
    let config: EngineConfig = serde_json::from_str(r#"{"rsi_period": 7}"#).unwrap();
    assert_eq!(config.rsi_period, 7);
    assert_eq!(config.macd_slow_span, 26);
    assert_eq!(config.thresholds.overbought, 70.0);
}
