//! Trendscope Worker
//!
//! Analyses every symbol in `SYMBOLS` from JSON series files in `DATA_DIR`,
//! logs each alert and finishes with the alert ranking.

use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use trendscope::config::EngineConfig;
use trendscope::core::analyzer::Analyzer;
use trendscope::core::runtime::{AnalysisRuntime, RuntimeConfig};
use trendscope::logging;
use trendscope::report::{last_change_pct, AlertLedger, MarketScenario};
use trendscope::services::market_data::{JsonFileMarketDataProvider, MarketDataProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = trendscope::config::get_environment();
    info!("Starting Trendscope Worker");
    info!(environment = %env, "Environment");

    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let engine_config = EngineConfig::from_env();
    let analyzer = Analyzer::new(engine_config)?;
    let runtime_config = RuntimeConfig::from_env();

    if runtime_config.symbols.is_empty() {
        return Err("SYMBOLS must list at least one instrument".into());
    }
    info!(
        symbols = ?runtime_config.symbols,
        data_dir = %data_dir,
        "Symbols: {}",
        runtime_config.symbols.join(", ")
    );

    let provider: Arc<dyn MarketDataProvider> = Arc::new(JsonFileMarketDataProvider::new(&data_dir));

    report_scenario(provider.as_ref()).await;

    let runtime = AnalysisRuntime::new(runtime_config, analyzer, provider);
    let summary = runtime.run().await;

    for report in summary.reports() {
        if let Some(latest) = report.latest() {
            info!(
                symbol = %report.symbol(),
                date = %latest.timestamp,
                close = latest.close,
                rsi = ?latest.indicators.rsi,
                zone = ?latest.rsi_zone,
                "{}: last close {:.2} on {}",
                report.symbol(),
                latest.close,
                latest.timestamp
            );
        }
    }

    report_ledger(&summary.ledger);

    let failed = summary.failures().count();
    if failed > 0 {
        warn!(failed = failed, "{} instrument(s) could not be analysed", failed);
    }
    info!("Analysis finished");

    Ok(())
}

async fn report_scenario(provider: &dyn MarketDataProvider) {
    let (Ok(index_symbol), Ok(fx_symbol)) = (env::var("SCENARIO_INDEX_SYMBOL"), env::var("SCENARIO_FX_SYMBOL")) else {
        return;
    };

    let (index, fx) = match (provider.get_series(&index_symbol).await, provider.get_series(&fx_symbol).await) {
        (Ok(index), Ok(fx)) => (index, fx),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "Could not load market scenario series");
            return;
        }
    };

    for series in [&index, &fx] {
        if let Some(change) = last_change_pct(series) {
            info!(symbol = %series.symbol, change_pct = change, "{}: {:+.2}% on the day", series.symbol, change);
        }
    }

    match MarketScenario::from_series(&index, &fx) {
        Some(scenario) => info!(scenario = ?scenario, "Market scenario: {}", scenario),
        None => warn!("Market scenario undefined for the loaded series"),
    }
}

fn report_ledger(ledger: &AlertLedger) {
    if ledger.is_empty() {
        info!("No alerts generated during the analysis");
        return;
    }

    info!(total = ledger.total(), "Alert report");
    for entry in ledger.ranking() {
        let dates: Vec<String> = entry.dates().iter().map(|d| d.format("%d/%m").to_string()).collect();
        info!(
            symbol = %entry.symbol,
            alerts = entry.count(),
            "{}: {} alerts - dates: {}",
            entry.symbol,
            entry.count(),
            dates.join(", ")
        );
    }
}
