use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use crate::config::{Config, LogFormat};
use ratedesk_core::{RateBoardService, RateBoardServiceTrait};
use ratedesk_market_data::CurrencyFreaksProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The terminal belongs to the UI, so diagnostics go to the configured log
/// file. `log` records from the library crates are bridged in by `init`.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let writer = Mutex::new(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init(),
    }
    Ok(())
}

pub fn build_service(config: &Config) -> Arc<dyn RateBoardServiceTrait> {
    let provider = Arc::new(CurrencyFreaksProvider::with_options(
        config.api_key.clone(),
        config.api_url.clone(),
        config.request_timeout,
    ));
    Arc::new(RateBoardService::new(provider, config.board.clone()))
}
