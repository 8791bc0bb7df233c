//! CurrencyFreaks provider for the latest fiat exchange rates.
//!
//! The `latest` endpoint returns the full table of rates quoted against one
//! unit of USD in a single call. The API key travels as the `apikey` query
//! parameter.

mod models;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSnapshot};
use crate::provider::RateProvider;

use self::models::{ErrorResponse, LatestRatesResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "CURRENCY_FREAKS";

/// Default endpoint for the latest rates
pub const DEFAULT_BASE_URL: &str = "https://api.currencyfreaks.com/latest";

/// Base currency assumed when the response omits it
const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CurrencyFreaks exchange rate provider.
///
/// # Example
///
/// ```ignore
/// use ratedesk_market_data::provider::currency_freaks::CurrencyFreaksProvider;
///
/// let provider = CurrencyFreaksProvider::new("your_api_key".to_string());
/// ```
pub struct CurrencyFreaksProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CurrencyFreaksProvider {
    /// Create a provider for the public endpoint with the default timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL.to_string(), REQUEST_TIMEOUT)
    }

    /// Create a provider against a custom endpoint and timeout.
    pub fn with_options(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request URL carries the API key, so it is stripped from the error.
    fn map_send_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e.without_url())
        }
    }

    /// Map a non-success status to an error, using the body's message when present.
    fn status_error(status: StatusCode, body: &str) -> MarketDataError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            },
            _ => {
                let message = serde_json::from_str::<ErrorResponse>(body)
                    .map(|e| e.error.message)
                    .unwrap_or_else(|_| format!("HTTP {}", status));
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message,
                }
            }
        }
    }
}

/// Parse the body of the `latest` endpoint into a snapshot.
pub fn parse_latest_response(body: &str) -> Result<RateSnapshot, MarketDataError> {
    let resp: LatestRatesResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?;

    let base = resp
        .base
        .as_deref()
        .map(CurrencyCode::new)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| CurrencyCode::new(DEFAULT_BASE_CURRENCY));

    Ok(RateSnapshot::from_raw_rates(
        base,
        resp.date,
        resp.rates,
        PROVIDER_ID.to_string(),
    ))
}

#[async_trait]
impl RateProvider for CurrencyFreaksProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self) -> Result<RateSnapshot, MarketDataError> {
        log::debug!("Fetching latest rates from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::map_send_error)?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let snapshot = parse_latest_response(&body)?;
        log::debug!(
            "Received {} rates against {} from {}",
            snapshot.len(),
            snapshot.base,
            PROVIDER_ID
        );
        Ok(snapshot)
    }
}
