//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// EMA of closes for the given span.
///
/// Seeded with the first close and defined from index 0, matching the
/// recursive `adjust=false` convention the MACD relies on.
pub fn calculate_ema(candles: &[Candle], span: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema(&closes, span)
}

