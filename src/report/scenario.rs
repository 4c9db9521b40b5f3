//! Broad market backdrop from a benchmark index and an FX rate.

use crate::models::indicators::Series;
use serde::{Deserialize, Serialize};
use std::fmt;

const INDEX_MOVE_PCT: f64 = 2.0;
const FX_MOVE_PCT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketScenario {
    /// Index rallying while the local currency strengthens.
    Positive,
    /// Index falling while the local currency weakens.
    Negative,
    Neutral,
}

impl MarketScenario {
    /// Classify from percent changes over the same period.
    ///
    /// `fx_change_pct` is the move of the foreign currency quoted in local
    /// currency, so a negative value means the local currency gained.
    pub fn classify(index_change_pct: f64, fx_change_pct: f64) -> Self {
        if index_change_pct > INDEX_MOVE_PCT && fx_change_pct < -FX_MOVE_PCT {
            MarketScenario::Positive
        } else if index_change_pct < -INDEX_MOVE_PCT && fx_change_pct > FX_MOVE_PCT {
            MarketScenario::Negative
        } else {
            MarketScenario::Neutral
        }
    }

    /// Classify straight from the two series; `None` if either change is undefined.
    pub fn from_series(index: &Series, fx: &Series) -> Option<Self> {
        Some(Self::classify(period_change_pct(index)?, period_change_pct(fx)?))
    }
}

impl fmt::Display for MarketScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketScenario::Positive => write!(f, "positive: index up, currency strengthening"),
            MarketScenario::Negative => write!(f, "negative: index down, currency weakening"),
            MarketScenario::Neutral => write!(f, "neutral"),
        }
    }
}

/// Percent change from the first to the last close.
pub fn period_change_pct(series: &Series) -> Option<f64> {
    let first = series.first()?.close;
    let last = series.last()?.close;
    pct_change(first, last)
}

/// Percent change of the last close against the one before it.
pub fn last_change_pct(series: &Series) -> Option<f64> {
    let n = series.len();
    if n < 2 {
        return None;
    }
    pct_change(series.candles[n - 2].close, series.candles[n - 1].close)
}

fn pct_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    let change = (to / from - 1.0) * 100.0;
    change.is_finite().then_some(change)
}
