//! Batch runtime analysing many instruments in one run.

use crate::config::env_or;
use crate::core::analyzer::Analyzer;
use crate::error::EngineError;
use crate::models::signal::Signal;
use crate::report::{AlertLedger, IndicatorReport};
use crate::services::market_data::{MarketDataProvider, ProviderError};
use futures_util::future::join_all;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

/// Why a single instrument produced no report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("analysis task failed: {0}")]
    Task(String),
}

/// Configuration for the batch runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    /// Pause between two consecutive retrievals from the provider.
    pub request_delay: Duration,
    /// Maximum number of instruments analysed at once.
    pub concurrency: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            request_delay: Duration::from_secs(5),
            concurrency: 4,
        }
    }
}

impl RuntimeConfig {
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            symbols,
            ..Self::default()
        }
    }

    /// Read `SYMBOLS` (comma separated), `REQUEST_DELAY_MS` and `CONCURRENCY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let symbols = env::var("SYMBOLS")
            .map(|raw| parse_symbols(&raw))
            .unwrap_or_default();
        let delay_ms = env_or("REQUEST_DELAY_MS", defaults.request_delay.as_millis() as u64);

        Self {
            symbols,
            request_delay: Duration::from_millis(delay_ms),
            concurrency: env_or("CONCURRENCY", defaults.concurrency).max(1),
        }
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Split a comma separated symbol list, dropping blanks and duplicates.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for symbol in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !symbols.iter().any(|s| s == symbol) {
            symbols.push(symbol.to_string());
        }
    }
    symbols
}

/// Result of one instrument in a batch.
#[derive(Debug)]
pub struct InstrumentOutcome {
    pub symbol: String,
    pub result: Result<IndicatorReport, AnalysisError>,
}

/// Everything a batch run produced.
#[derive(Debug)]
pub struct BatchSummary {
    /// One outcome per configured symbol, in configuration order.
    pub outcomes: Vec<InstrumentOutcome>,
    pub ledger: AlertLedger,
}

impl BatchSummary {
    pub fn reports(&self) -> impl Iterator<Item = &IndicatorReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &AnalysisError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.symbol.as_str(), e)))
    }
}

enum Pending {
    Ready(Result<IndicatorReport, AnalysisError>),
    Running(JoinHandle<Result<IndicatorReport, EngineError>>),
}

/// Fetches each configured symbol and analyses it on a blocking worker.
///
/// Retrieval is sequential with `request_delay` between calls; analysis of
/// already-fetched series overlaps, bounded by `concurrency`. Instruments share
/// nothing but the read-only analyzer.
pub struct AnalysisRuntime {
    config: RuntimeConfig,
    analyzer: Arc<Analyzer>,
    provider: Arc<dyn MarketDataProvider>,
}

impl AnalysisRuntime {
    pub fn new(config: RuntimeConfig, analyzer: Analyzer, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            config,
            analyzer: Arc::new(analyzer),
            provider,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Analyse every configured symbol. Individual failures are reported in
    /// the summary and never stop the batch.
    pub async fn run(&self) -> BatchSummary {
        info!(
            symbols = self.config.symbols.len(),
            concurrency = self.config.concurrency,
            "AnalysisRuntime: starting batch of {} symbols",
            self.config.symbols.len()
        );

        let permits = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut pending = Vec::with_capacity(self.config.symbols.len());

        for (n, symbol) in self.config.symbols.iter().enumerate() {
            if n > 0 && !self.config.request_delay.is_zero() {
                sleep(self.config.request_delay).await;
            }

            let series = match self.provider.get_series(symbol).await {
                Ok(series) => series,
                Err(e) => {
                    pending.push((symbol.clone(), Pending::Ready(Err(e.into()))));
                    continue;
                }
            };

            let permit = match permits.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    pending.push((symbol.clone(), Pending::Ready(Err(AnalysisError::Task(e.to_string())))));
                    continue;
                }
            };
            let analyzer = self.analyzer.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                analyzer.analyze(&series)
            });
            pending.push((symbol.clone(), Pending::Running(handle)));
        }

        let outcomes = join_all(pending.into_iter().map(|(symbol, p)| async move {
            let result = match p {
                Pending::Ready(result) => result,
                Pending::Running(handle) => match handle.await {
                    Ok(result) => result.map_err(AnalysisError::from),
                    Err(e) => Err(AnalysisError::Task(e.to_string())),
                },
            };
            InstrumentOutcome { symbol, result }
        }))
        .await;

        let mut ledger = AlertLedger::new();
        for outcome in &outcomes {
            match &outcome.result {
                Ok(report) => {
                    for signal in report.signals() {
                        log_alert(&outcome.symbol, signal);
                    }
                    // Only buy alerts feed the ranking; sells are logged above.
                    let buys: Vec<Signal> = report.buys().copied().collect();
                    ledger.record(&outcome.symbol, &buys);
                }
                Err(e) => {
                    warn!(symbol = %outcome.symbol, error = %e, "AnalysisRuntime: skipping {}", outcome.symbol);
                }
            }
        }

        info!(
            analysed = outcomes.iter().filter(|o| o.result.is_ok()).count(),
            failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
            alerts = ledger.total(),
            "AnalysisRuntime: batch finished"
        );

        BatchSummary { outcomes, ledger }
    }
}

fn log_alert(symbol: &str, signal: &Signal) {
    info!(
        symbol = %symbol,
        kind = %signal.kind,
        date = %signal.timestamp,
        price = signal.price,
        "{} alert: {} on {} at {:.2}",
        signal.kind,
        symbol,
        signal.timestamp,
        signal.price
    );
}
