use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLC observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: u64,
}

impl Candle {
    pub fn new(timestamp: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Candle with every price equal to `close`, handy for synthetic series.
    pub fn flat(timestamp: NaiveDate, close: f64) -> Self {
        Self::new(timestamp, close, close, close, close, 0)
    }
}

/// Ordered price history for one instrument.
///
/// The engine only ever borrows a series; ordering is checked when an analysis
/// starts, not on construction, so deserialized input goes through the same
/// validation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub symbol: String,
    pub candles: Vec<Candle>,
}

impl Series {
    pub fn new(symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        Self {
            symbol: symbol.into(),
            candles,
        }
    }

    /// Build a series of flat daily candles starting at `start`, one calendar
    /// day apart.
    pub fn from_closes(symbol: impl Into<String>, start: NaiveDate, closes: &[f64]) -> Self {
        let candles = start
            .iter_days()
            .zip(closes)
            .map(|(day, &close)| Candle::flat(day, close))
            .collect();
        Self::new(symbol, candles)
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.candles.iter().map(|c| c.timestamp).collect()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }
}
