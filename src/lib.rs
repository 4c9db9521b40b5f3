//! Technical indicator and crossover signal engine for daily OHLC series.
//!
//! A [`Series`](models::Series) goes through [`Analyzer`](core::Analyzer),
//! which fills an index-aligned [`IndicatorFrame`](models::IndicatorFrame)
//! (moving averages, RSI, MACD, Bollinger bands, daily change) and runs the
//! [`SignalEngine`](signals::SignalEngine) over it. Results come back as an
//! [`IndicatorReport`](report::IndicatorReport).

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use crate::config::{EngineConfig, SignalThresholds};
pub use crate::core::Analyzer;
pub use crate::error::EngineError;
pub use crate::report::IndicatorReport;
