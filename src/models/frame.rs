//! Index-aligned table of derived metrics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column-oriented indicator table aligned with a [`Series`](super::Series).
///
/// Row `i` of every column belongs to candle `i` of the source series. Columns
/// start out fully `None`; each calculator fills only the columns it owns
/// through the matching setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    timestamps: Vec<NaiveDate>,
    ma_short: Vec<Option<f64>>,
    ma_long: Vec<Option<f64>>,
    rsi: Vec<Option<f64>>,
    macd: Vec<Option<f64>>,
    signal: Vec<Option<f64>>,
    histogram: Vec<Option<f64>>,
    bb_middle: Vec<Option<f64>>,
    bb_upper: Vec<Option<f64>>,
    bb_lower: Vec<Option<f64>>,
    daily_pct_change: Vec<Option<f64>>,
}

/// One row of the frame, copied out for callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: NaiveDate,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub daily_pct_change: Option<f64>,
}

impl IndicatorFrame {
    /// Empty frame with one all-`None` row per timestamp.
    pub fn new(timestamps: Vec<NaiveDate>) -> Self {
        let n = timestamps.len();
        Self {
            timestamps,
            ma_short: vec![None; n],
            ma_long: vec![None; n],
            rsi: vec![None; n],
            macd: vec![None; n],
            signal: vec![None; n],
            histogram: vec![None; n],
            bb_middle: vec![None; n],
            bb_upper: vec![None; n],
            bb_lower: vec![None; n],
            daily_pct_change: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<IndicatorRow> {
        Some(IndicatorRow {
            timestamp: *self.timestamps.get(i)?,
            ma_short: self.ma_short[i],
            ma_long: self.ma_long[i],
            rsi: self.rsi[i],
            macd: self.macd[i],
            signal: self.signal[i],
            histogram: self.histogram[i],
            bb_middle: self.bb_middle[i],
            bb_upper: self.bb_upper[i],
            bb_lower: self.bb_lower[i],
            daily_pct_change: self.daily_pct_change[i],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = IndicatorRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    pub fn ma_short(&self) -> &[Option<f64>] {
        &self.ma_short
    }

    pub fn ma_long(&self) -> &[Option<f64>] {
        &self.ma_long
    }

    pub fn rsi(&self) -> &[Option<f64>] {
        &self.rsi
    }

    pub fn macd(&self) -> &[Option<f64>] {
        &self.macd
    }

    pub fn signal(&self) -> &[Option<f64>] {
        &self.signal
    }

    pub fn histogram(&self) -> &[Option<f64>] {
        &self.histogram
    }

    pub fn bb_middle(&self) -> &[Option<f64>] {
        &self.bb_middle
    }

    pub fn bb_upper(&self) -> &[Option<f64>] {
        &self.bb_upper
    }

    pub fn bb_lower(&self) -> &[Option<f64>] {
        &self.bb_lower
    }

    pub fn daily_pct_change(&self) -> &[Option<f64>] {
        &self.daily_pct_change
    }

    pub fn set_moving_averages(&mut self, short: Vec<Option<f64>>, long: Vec<Option<f64>>) {
        Self::fill(&mut self.ma_short, short);
        Self::fill(&mut self.ma_long, long);
    }

    pub fn set_rsi(&mut self, rsi: Vec<Option<f64>>) {
        Self::fill(&mut self.rsi, rsi);
    }

    pub fn set_macd(&mut self, macd: Vec<Option<f64>>, signal: Vec<Option<f64>>, histogram: Vec<Option<f64>>) {
        Self::fill(&mut self.macd, macd);
        Self::fill(&mut self.signal, signal);
        Self::fill(&mut self.histogram, histogram);
    }

    pub fn set_bollinger(&mut self, middle: Vec<Option<f64>>, upper: Vec<Option<f64>>, lower: Vec<Option<f64>>) {
        Self::fill(&mut self.bb_middle, middle);
        Self::fill(&mut self.bb_upper, upper);
        Self::fill(&mut self.bb_lower, lower);
    }

    pub fn set_daily_pct_change(&mut self, change: Vec<Option<f64>>) {
        Self::fill(&mut self.daily_pct_change, change);
    }

    // Copies row by row so a short input can never shift or shrink a column.
    fn fill(column: &mut [Option<f64>], values: Vec<Option<f64>>) {
        debug_assert_eq!(column.len(), values.len(), "frame column length mismatch");
        for (slot, value) in column.iter_mut().zip(values) {
            *slot = value;
        }
    }
}
