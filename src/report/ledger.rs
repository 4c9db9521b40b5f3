//! Caller-owned accumulation of alerts across a batch run.

use crate::models::signal::{Signal, SignalKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Alerts recorded for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub symbol: String,
    pub alerts: Vec<Signal>,
}

impl LedgerEntry {
    pub fn count(&self) -> usize {
        self.alerts.len()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.alerts.iter().map(|s| s.timestamp).collect()
    }

    pub fn count_of(&self, kind: SignalKind) -> usize {
        self.alerts.iter().filter(|s| s.kind == kind).count()
    }
}

/// Per-instrument alert ledger.
///
/// Create one per batch, feed it each instrument's signals, read the ranking,
/// then drop it. Nothing in the engine keeps a reference to it.
#[derive(Debug, Clone, Default)]
pub struct AlertLedger {
    entries: BTreeMap<String, Vec<Signal>>,
}

impl AlertLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append signals for `symbol`. Empty slices leave no trace.
    pub fn record(&mut self, symbol: &str, signals: &[Signal]) {
        if signals.is_empty() {
            return;
        }
        self.entries
            .entry(symbol.to_string())
            .or_default()
            .extend_from_slice(signals);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn alerts_for(&self, symbol: &str) -> &[Signal] {
        self.entries.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Instruments ordered by number of alerts, most first; ties by symbol.
    pub fn ranking(&self) -> Vec<LedgerEntry> {
        let mut ranked: Vec<LedgerEntry> = self
            .entries
            .iter()
            .map(|(symbol, alerts)| LedgerEntry {
                symbol: symbol.clone(),
                alerts: alerts.clone(),
            })
            .collect();
        // Stable sort keeps the BTreeMap's symbol order among equal counts.
        ranked.sort_by(|a, b| b.count().cmp(&a.count()));
        ranked
    }
}
