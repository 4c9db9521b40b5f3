//! Engine configuration and environment helpers.
//!
//! Every window length and threshold used by the calculators lives here so
//! callers can override them. Defaults follow the classic daily-chart settings.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Current deployment environment (`ENVIRONMENT`, defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// RSI filter bounds applied by the signal engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Buy signals require RSI strictly below this value.
    pub oversold: f64,
    /// Sell signals require RSI strictly above this value.
    pub overbought: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

/// Parameters for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub macd_fast_span: usize,
    pub macd_slow_span: usize,
    pub macd_signal_span: usize,
    pub rsi_period: usize,
    pub ma_short_window: usize,
    pub ma_long_window: usize,
    pub bollinger_window: usize,
    pub bollinger_multiplier: f64,
    pub thresholds: SignalThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            macd_fast_span: 12,
            macd_slow_span: 26,
            macd_signal_span: 9,
            rsi_period: 14,
            ma_short_window: 80,
            ma_long_window: 200,
            bollinger_window: 20,
            bollinger_multiplier: 2.0,
            thresholds: SignalThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config from environment overrides.
    ///
    /// Missing or unparsable variables fall back to the default value.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            macd_fast_span: env_or("MACD_FAST_SPAN", defaults.macd_fast_span),
            macd_slow_span: env_or("MACD_SLOW_SPAN", defaults.macd_slow_span),
            macd_signal_span: env_or("MACD_SIGNAL_SPAN", defaults.macd_signal_span),
            rsi_period: env_or("RSI_PERIOD", defaults.rsi_period),
            ma_short_window: env_or("MA_SHORT_WINDOW", defaults.ma_short_window),
            ma_long_window: env_or("MA_LONG_WINDOW", defaults.ma_long_window),
            bollinger_window: env_or("BOLLINGER_WINDOW", defaults.bollinger_window),
            bollinger_multiplier: env_or("BOLLINGER_MULTIPLIER", defaults.bollinger_multiplier),
            thresholds: SignalThresholds {
                oversold: env_or("RSI_OVERSOLD", defaults.thresholds.oversold),
                overbought: env_or("RSI_OVERBOUGHT", defaults.thresholds.overbought),
            },
        }
    }

    /// Reject parameter combinations the calculators cannot honour.
    pub fn validate(&self) -> Result<(), EngineError> {
        let windows = [
            ("macd_fast_span", self.macd_fast_span),
            ("macd_slow_span", self.macd_slow_span),
            ("macd_signal_span", self.macd_signal_span),
            ("rsi_period", self.rsi_period),
            ("ma_short_window", self.ma_short_window),
            ("ma_long_window", self.ma_long_window),
            ("bollinger_window", self.bollinger_window),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(EngineError::invalid_config(format!("{} must be >= 1", name)));
            }
        }

        if self.macd_fast_span >= self.macd_slow_span {
            return Err(EngineError::invalid_config(format!(
                "macd_fast_span ({}) must be less than macd_slow_span ({})",
                self.macd_fast_span, self.macd_slow_span
            )));
        }

        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier < 0.0 {
            return Err(EngineError::invalid_config(format!(
                "bollinger_multiplier must be finite and >= 0, got {}",
                self.bollinger_multiplier
            )));
        }

        let SignalThresholds { oversold, overbought } = self.thresholds;
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !in_range(oversold) || !in_range(overbought) || oversold >= overbought {
            return Err(EngineError::invalid_config(format!(
                "RSI thresholds must satisfy 0 <= oversold < overbought <= 100, got {}/{}",
                oversold, overbought
            )));
        }

        Ok(())
    }
}

pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
