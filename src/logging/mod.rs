//! Logging initialization with environment-based formatters
//!
//! - Production: structured JSON lines for log aggregation
//! - Sandbox: colored, human-readable output for local runs

use crate::config::get_environment;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` wins when set to `json`/`pretty`; otherwise production
    /// environments get JSON.
    pub fn detect() -> Self {
        match env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ => {
                if matches!(get_environment().as_str(), "production" | "prod") {
                    LogFormat::Json
                } else {
                    LogFormat::Pretty
                }
            }
        }
    }
}

/// Initialize logging with the format detected from the environment.
pub fn init_logging() {
    init_logging_with(LogFormat::detect());
}

/// Initialize logging with an explicit format.
///
/// A second call is a no-op: the global subscriber is only installed once.
pub fn init_logging_with(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("logging already initialized, keeping existing subscriber");
    }
}
