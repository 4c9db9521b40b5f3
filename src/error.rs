//! Engine error types.
//!
//! Warm-up gaps and degenerate divisions are not errors: they surface as `None`
//! values in the indicator frame. Only contract violations by the caller end up
//! here.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors reported by the indicator engine for a single series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The series contains no observations
    #[error("series for {symbol} is empty")]
    EmptySeries {
        /// Instrument symbol.
        symbol: String,
    },

    /// Timestamps are not strictly increasing
    #[error("non-monotonic timestamp at index {index}: {current} does not follow {previous}")]
    NonMonotonicTimestamp {
        /// Index of the offending observation.
        index: usize,
        /// Timestamp at `index - 1`.
        previous: NaiveDate,
        /// Timestamp at `index`.
        current: NaiveDate,
    },

    /// A price field is NaN or infinite
    #[error("non-finite {field} price at index {index}")]
    NonFinitePrice {
        /// Index of the offending observation.
        index: usize,
        /// Name of the OHLC field.
        field: &'static str,
    },

    /// Engine configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Creates an `InvalidConfig` error with a message.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfig(msg.into())
    }
}
