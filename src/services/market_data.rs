//! Market data provider interface.
//!
//! Retrieval lives outside the engine; the batch runtime only sees this trait.

use crate::models::indicators::Series;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no data for {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse series for {symbol}: {source}")]
    Parse {
        symbol: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Full daily history available for `symbol`, oldest first.
    async fn get_series(&self, symbol: &str) -> Result<Series, ProviderError>;
}

/// Reads `<dir>/<SYMBOL>.json`, each file a serialized [`Series`].
#[derive(Debug, Clone)]
pub struct JsonFileMarketDataProvider {
    dir: PathBuf,
}

impl JsonFileMarketDataProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.json", symbol))
    }
}

#[async_trait]
impl MarketDataProvider for JsonFileMarketDataProvider {
    async fn get_series(&self, symbol: &str) -> Result<Series, ProviderError> {
        let path = self.path_for(symbol);
        debug!(symbol = %symbol, path = %path.display(), "loading series from disk");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProviderError::NotFound(symbol.to_string()));
            }
            Err(source) => return Err(ProviderError::Io { path, source }),
        };

        let mut series: Series = serde_json::from_slice(&bytes).map_err(|source| ProviderError::Parse {
            symbol: symbol.to_string(),
            source,
        })?;
        if series.symbol.is_empty() {
            series.symbol = symbol.to_string();
        }
        Ok(series)
    }
}

/// Provider backed by series held in memory.
#[derive(Debug, Default)]
pub struct InMemoryMarketDataProvider {
    series: RwLock<HashMap<String, Series>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, series: Series) {
        self.series.write().await.insert(series.symbol.clone(), series);
    }
}

impl FromIterator<Series> for InMemoryMarketDataProvider {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        let map = iter.into_iter().map(|s| (s.symbol.clone(), s)).collect();
        Self {
            series: RwLock::new(map),
        }
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_series(&self, symbol: &str) -> Result<Series, ProviderError> {
        self.series
            .read()
            .await
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))
    }
}
