//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// Band columns aligned with the input candles.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (multiplier * sample standard deviation)
/// Lower Band = Middle - (multiplier * sample standard deviation)
///
/// Both bands are `None` wherever the middle band or the deviation is.
pub fn calculate_bollinger_bands(candles: &[Candle], window: usize, multiplier: f64) -> BollingerSeries {
    let closes: Vec<Option<f64>> = candles.iter().map(|c| Some(c.close)).collect();
    let middle = math::rolling_mean(&closes, window);
    let std = math::rolling_sample_std(&closes, window);

    let (upper, lower) = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => (Some(m + multiplier * s), Some(m - multiplier * s)),
            _ => (None, None),
        })
        .unzip();

    BollingerSeries { middle, upper, lower }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> BollingerSeries {
    calculate_bollinger_bands(candles, 20, 2.0)
}
