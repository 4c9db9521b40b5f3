//! Crossover signal engine.

use crate::config::SignalThresholds;
use crate::models::frame::IndicatorFrame;
use crate::models::indicators::Series;
use crate::models::signal::{Signal, SignalKind};
use crate::signals::crossover::{detect_crossover, CrossoverType};

/// Turns MACD/RSI columns of a frame into discrete buy/sell events.
///
/// - Buy at `i`: MACD crosses above its signal line between `i-1` and `i`
///   and RSI at `i` is below the oversold threshold.
/// - Sell at `i`: MACD crosses below its signal line and RSI at `i` is above
///   the overbought threshold.
///
/// Evaluation of row `i` reads rows `i-1` and `i` only. The engine holds no
/// state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    thresholds: SignalThresholds,
}

impl SignalEngine {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    /// Detect signals over the whole frame, in index order.
    ///
    /// `series` supplies the close and timestamp carried by each signal and
    /// must be the series the frame was computed from.
    pub fn detect(&self, series: &Series, frame: &IndicatorFrame) -> Vec<Signal> {
        debug_assert_eq!(series.len(), frame.len(), "frame not aligned with series");

        (1..frame.len().min(series.len()))
            .filter_map(|i| {
                let kind = self.evaluate_at(frame, i)?;
                let candle = &series.candles[i];
                Some(Signal {
                    index: i,
                    kind,
                    price: candle.close,
                    timestamp: candle.timestamp,
                })
            })
            .collect()
    }

    /// Signal kind emitted at row `i`, if any. Row 0 never signals.
    pub fn evaluate_at(&self, frame: &IndicatorFrame, i: usize) -> Option<SignalKind> {
        if i == 0 || i >= frame.len() {
            return None;
        }
        let (macd, signal) = (frame.macd(), frame.signal());
        let rsi = frame.rsi()[i]?;

        match detect_crossover(macd[i - 1], signal[i - 1], macd[i], signal[i]) {
            CrossoverType::Bullish if rsi < self.thresholds.oversold => Some(SignalKind::Buy),
            CrossoverType::Bearish if rsi > self.thresholds.overbought => Some(SignalKind::Sell),
            _ => None,
        }
    }
}
