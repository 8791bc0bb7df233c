//! In-memory provider serving a fixed rate table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSnapshot};
use crate::provider::RateProvider;

/// Provider that answers from a table set by the test, counting calls.
pub struct FixedRateProvider {
    base: CurrencyCode,
    rates: Mutex<HashMap<String, Decimal>>,
    failing: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl FixedRateProvider {
    pub fn new(base: &str) -> Self {
        Self {
            base: CurrencyCode::new(base),
            rates: Mutex::new(HashMap::new()),
            failing: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Builder-style helper to seed one rate.
    pub fn with_rate(self, code: &str, rate: Decimal) -> Self {
        self.set_rate(code, rate);
        self
    }

    pub fn set_rate(&self, code: &str, rate: Decimal) {
        if let Ok(mut rates) = self.rates.lock() {
            rates.insert(CurrencyCode::new(code).to_string(), rate);
        }
    }

    /// Make every subsequent fetch fail with a provider error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut failing) = self.failing.lock() {
            *failing = Some(message.to_string());
        }
    }

    pub fn recover(&self) {
        if let Ok(mut failing) = self.failing.lock() {
            *failing = None;
        }
    }

    /// Number of `latest_rates` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    fn id(&self) -> &'static str {
        "FIXED"
    }

    async fn latest_rates(&self) -> Result<RateSnapshot, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let failing = self
            .failing
            .lock()
            .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?
            .clone();
        if let Some(message) = failing {
            return Err(MarketDataError::ProviderError {
                provider: self.id().to_string(),
                message,
            });
        }

        let rates = self
            .rates
            .lock()
            .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?
            .clone();
        Ok(RateSnapshot::new(
            self.base.clone(),
            None,
            rates,
            self.id().to_string(),
        ))
    }
}
