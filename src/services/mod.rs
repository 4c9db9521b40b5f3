//! Collaborator seams outside the engine.

pub mod market_data;

pub use market_data::{InMemoryMarketDataProvider, JsonFileMarketDataProvider, MarketDataProvider, ProviderError};
