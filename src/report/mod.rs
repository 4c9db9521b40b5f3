//! Read-only views handed to callers once an analysis finishes.

pub mod ledger;
pub mod scenario;

pub use ledger::{AlertLedger, LedgerEntry};
pub use scenario::{last_change_pct, period_change_pct, MarketScenario};

use crate::config::SignalThresholds;
use crate::indicators::momentum::RsiZone;
use crate::models::frame::{IndicatorFrame, IndicatorRow};
use crate::models::indicators::Series;
use crate::models::signal::{Signal, SignalKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything one analysis run produced for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    symbol: String,
    closes: Vec<f64>,
    frame: IndicatorFrame,
    signals: Vec<Signal>,
    thresholds: SignalThresholds,
}

/// Final row of a report together with its close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub timestamp: NaiveDate,
    pub close: f64,
    pub indicators: IndicatorRow,
    /// `None` while RSI is undefined.
    pub rsi_zone: Option<RsiZone>,
}

impl IndicatorReport {
    pub fn new(series: &Series, frame: IndicatorFrame, signals: Vec<Signal>, thresholds: SignalThresholds) -> Self {
        Self {
            symbol: series.symbol.clone(),
            closes: series.closes(),
            frame,
            signals,
            thresholds,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    pub fn frame(&self) -> &IndicatorFrame {
        &self.frame
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn buys(&self) -> impl Iterator<Item = &Signal> {
        self.of_kind(SignalKind::Buy)
    }

    pub fn sells(&self) -> impl Iterator<Item = &Signal> {
        self.of_kind(SignalKind::Sell)
    }

    pub fn latest(&self) -> Option<LatestSnapshot> {
        let i = self.len().checked_sub(1)?;
        let row = self.frame.row(i)?;
        Some(LatestSnapshot {
            timestamp: row.timestamp,
            close: *self.closes.get(i)?,
            indicators: row,
            rsi_zone: row.rsi.map(|v| RsiZone::classify(v, &self.thresholds)),
        })
    }

    fn of_kind(&self, kind: SignalKind) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(move |s| s.kind == kind)
    }
}
