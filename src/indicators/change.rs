//! Day-over-day percentage move.

use crate::models::indicators::Candle;

/// `(close[i] - close[i-1]) / open[i] * 100` for every candle.
///
/// Row 0 has no previous close and reports `0.0`. A zero open makes the ratio
/// meaningless, so that row is `None`.
pub fn calculate_daily_pct_change(candles: &[Candle]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(candles.len());
    if candles.is_empty() {
        return out;
    }

    out.push(Some(0.0));
    for pair in candles.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let change = if cur.open == 0.0 {
            None
        } else {
            Some((cur.close - prev.close) / cur.open * 100.0)
        };
        out.push(change);
    }

    out
}
