//! Single-instrument analysis pipeline.

use crate::common::math;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_moving_averages;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::indicators::{calculate_daily_pct_change, validate_series};
use crate::models::frame::IndicatorFrame;
use crate::models::indicators::Series;
use crate::report::IndicatorReport;
use crate::signals::engine::SignalEngine;
use tracing::{debug, info};

/// Runs every calculator over a series and detects signals.
///
/// Holds only configuration; each call to [`Analyzer::analyze`] is independent,
/// so one analyzer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    /// Create an analyzer, rejecting invalid configuration up front.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the indicator frame for a validated series.
    pub fn compute_frame(&self, series: &Series) -> Result<IndicatorFrame, EngineError> {
        validate_series(series)?;

        let cfg = &self.config;
        let candles = series.candles.as_slice();
        let mut frame = IndicatorFrame::new(series.timestamps());

        let (ma_short, ma_long) = calculate_moving_averages(candles, cfg.ma_short_window, cfg.ma_long_window);
        frame.set_moving_averages(ma_short, ma_long);
        debug!(symbol = %series.symbol, "moving averages computed");

        frame.set_rsi(calculate_rsi(candles, cfg.rsi_period));
        debug!(symbol = %series.symbol, period = cfg.rsi_period, "RSI computed");

        let macd = calculate_macd(candles, cfg.macd_fast_span, cfg.macd_slow_span, cfg.macd_signal_span);
        frame.set_macd(
            math::defined(&macd.macd),
            math::defined(&macd.signal),
            math::defined(&macd.histogram),
        );
        debug!(symbol = %series.symbol, "MACD computed");

        let bands = calculate_bollinger_bands(candles, cfg.bollinger_window, cfg.bollinger_multiplier);
        frame.set_bollinger(bands.middle, bands.upper, bands.lower);
        debug!(symbol = %series.symbol, window = cfg.bollinger_window, "Bollinger bands computed");

        frame.set_daily_pct_change(calculate_daily_pct_change(candles));

        Ok(frame)
    }

    /// Full analysis: validation, indicators, signals.
    ///
    /// # Errors
    /// Returns [`EngineError`] when the series violates the input contract.
    /// Short series are not an error; their warm-up rows are simply `None`.
    pub fn analyze(&self, series: &Series) -> Result<IndicatorReport, EngineError> {
        let frame = self.compute_frame(series)?;
        let engine = SignalEngine::new(self.config.thresholds);
        let signals = engine.detect(series, &frame);

        info!(
            symbol = %series.symbol,
            candles = series.len(),
            signals = signals.len(),
            "analysis complete for {}",
            series.symbol
        );

        Ok(IndicatorReport::new(series, frame, signals, self.config.thresholds))
    }
}
