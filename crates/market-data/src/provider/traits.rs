//! Rate provider trait definitions.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, RateSnapshot};

/// Trait for exchange rate providers.
///
/// A provider returns its whole rate table in one call; single-currency
/// lookups are answered from a fresh table.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ratedesk_market_data::provider::RateProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl RateProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn latest_rates(&self) -> Result<RateSnapshot, MarketDataError> {
///         // ... call the remote API
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and snapshots.
    fn id(&self) -> &'static str;

    /// Fetch the provider's latest full rate table.
    async fn latest_rates(&self) -> Result<RateSnapshot, MarketDataError>;

    /// Fetch a fresh rate table and read one currency out of it.
    ///
    /// Returns [`MarketDataError::CurrencyNotFound`] when the provider does not
    /// quote `code`.
    async fn latest_rate(&self, code: &CurrencyCode) -> Result<Decimal, MarketDataError> {
        let snapshot = self.latest_rates().await?;
        snapshot
            .rate(code)
            .ok_or_else(|| MarketDataError::CurrencyNotFound(code.to_string()))
    }
}
