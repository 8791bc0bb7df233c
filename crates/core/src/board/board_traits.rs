use async_trait::async_trait;
use rust_decimal::Decimal;

use super::board_model::BoardSnapshot;
use super::spread::SpreadPolicy;
use crate::errors::Result;
use ratedesk_market_data::CurrencyCode;

/// Trait defining the contract for rate board operations.
#[async_trait]
pub trait RateBoardServiceTrait: Send + Sync {
    /// Fetch the full rate set once and build rows for the configured codes.
    async fn load_board(&self) -> Result<BoardSnapshot>;

    /// Fetch a fresh rate set and read one code from it.
    ///
    /// `Ok(None)` means the provider answered but does not quote `code`.
    async fn lookup_mid_rate(&self, code: &CurrencyCode) -> Result<Option<Decimal>>;

    fn spread(&self) -> &SpreadPolicy;
}
