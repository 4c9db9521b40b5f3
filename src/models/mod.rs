//! Shared data models spanning the engine layers.

pub mod frame;
pub mod indicators;
pub mod signal;

pub use frame::{IndicatorFrame, IndicatorRow};
pub use indicators::{Candle, Series};
pub use signal::{Signal, SignalKind};
