//! Signal detection over computed indicator frames.

pub mod crossover;
pub mod engine;

pub use crossover::{detect_crossover, CrossoverType};
pub use engine::SignalEngine;
