//! Two-line crossover detection between consecutive rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    /// Line moved from strictly below to strictly above the reference.
    Bullish,
    /// Line moved from strictly above to strictly below the reference.
    Bearish,
    None,
}

/// Classify the move of `line` against `reference` from row `i-1` to row `i`.
///
/// Touching (equal values) on either row is not a crossover. Any missing value
/// yields `CrossoverType::None`.
pub fn detect_crossover(
    prev_line: Option<f64>,
    prev_reference: Option<f64>,
    line: Option<f64>,
    reference: Option<f64>,
) -> CrossoverType {
    let (Some(prev_line), Some(prev_reference), Some(line), Some(reference)) =
        (prev_line, prev_reference, line, reference)
    else {
        return CrossoverType::None;
    };

    if line > reference && prev_line < prev_reference {
        CrossoverType::Bullish
    } else if line < reference && prev_line > prev_reference {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}
