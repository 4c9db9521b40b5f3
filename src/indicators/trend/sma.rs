//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// Rolling mean of closes over `window` candles.
///
/// Index `i` is defined once `i >= window - 1`; earlier rows are `None`.
pub fn calculate_sma(candles: &[Candle], window: usize) -> Vec<Option<f64>> {
    let closes: Vec<Option<f64>> = candles.iter().map(|c| Some(c.close)).collect();
    math::rolling_mean(&closes, window)
}

/// Short and long moving averages.
pub fn calculate_moving_averages(
    candles: &[Candle],
    short_window: usize,
    long_window: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    (
        calculate_sma(candles, short_window),
        calculate_sma(candles, long_window),
    )
}
