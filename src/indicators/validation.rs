//! Input contract checks run before any indicator is computed.

use crate::error::EngineError;
use crate::models::indicators::Series;

/// Validates a series before analysis.
///
/// # Errors
/// - [`EngineError::EmptySeries`] when the series has no candles.
/// - [`EngineError::NonFinitePrice`] when any OHLC value is NaN or infinite.
/// - [`EngineError::NonMonotonicTimestamp`] when a timestamp does not strictly
///   follow the previous one (duplicates included).
pub fn validate_series(series: &Series) -> Result<(), EngineError> {
    if series.is_empty() {
        return Err(EngineError::EmptySeries {
            symbol: series.symbol.clone(),
        });
    }

    for (i, candle) in series.candles.iter().enumerate() {
        let fields = [
            ("open", candle.open),
            ("high", candle.high),
            ("low", candle.low),
            ("close", candle.close),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::NonFinitePrice { index: i, field });
        }
    }

    for (i, pair) in series.candles.windows(2).enumerate() {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(EngineError::NonMonotonicTimestamp {
                index: i + 1,
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
    }

    Ok(())
}
