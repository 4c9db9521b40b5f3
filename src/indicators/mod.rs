//! Indicator calculators.
//!
//! Every calculator borrows the candles read-only and returns one value per
//! candle, so results can be written straight into an [`IndicatorFrame`].
//!
//! [`IndicatorFrame`]: crate::models::IndicatorFrame

pub mod change;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use change::calculate_daily_pct_change;
pub use validation::validate_series;
