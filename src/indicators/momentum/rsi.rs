//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::config::SignalThresholds;
use crate::models::indicators::Candle;
use serde::{Deserialize, Serialize};

/// Calculate the RSI series
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = mean gain / mean loss over the last `period` close-to-close deltas
///
/// Rows before `period` deltas exist are `None`, and so is any row whose mean
/// loss is zero: a window without losses has no defined RS.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut gains: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut losses: Vec<Option<f64>> = Vec::with_capacity(n);

    // No delta exists at index 0.
    if n > 0 {
        gains.push(None);
        losses.push(None);
    }
    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| rsi_from_averages(gain?, loss?))
        .collect()
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return None;
    }
    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));
    rsi.is_finite().then_some(rsi)
}

/// Where an RSI reading sits relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    pub fn classify(rsi: f64, thresholds: &SignalThresholds) -> Self {
        if rsi < thresholds.oversold {
            RsiZone::Oversold
        } else if rsi > thresholds.overbought {
            RsiZone::Overbought
        } else {
            RsiZone::Neutral
        }
    }
}
