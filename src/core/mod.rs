//! Core application primitives (analysis pipeline, batch runtime)

pub mod analyzer;
pub mod runtime;

pub use analyzer::Analyzer;
pub use runtime::{AnalysisError, AnalysisRuntime, BatchSummary, InstrumentOutcome, RuntimeConfig};
