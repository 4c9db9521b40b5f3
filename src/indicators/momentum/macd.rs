//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// MACD line, signal line and histogram, one value per candle.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Every EMA is seeded at index 0, so all three lines are defined for the whole
/// series. Early rows carry the seed's estimation error.
pub fn calculate_macd(candles: &[Candle], fast_span: usize, slow_span: usize, signal_span: usize) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_ema = math::ema(&closes, fast_span);
    let slow_ema = math::ema(&closes, slow_span);

    let macd: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
    let signal = math::ema(&macd, signal_span);
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with default spans (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> MacdSeries {
    calculate_macd(candles, 12, 26, 9)
}
