use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::board_model::BoardSnapshot;
use super::board_traits::RateBoardServiceTrait;
use super::spread::SpreadPolicy;
use crate::errors::Result;
use crate::settings::BoardSettings;
use ratedesk_market_data::{CurrencyCode, MarketDataError, RateProvider, RateSnapshot};

pub struct RateBoardService {
    provider: Arc<dyn RateProvider>,
    settings: BoardSettings,
}

impl RateBoardService {
    pub fn new(provider: Arc<dyn RateProvider>, settings: BoardSettings) -> Self {
        Self { provider, settings }
    }

    /// Build rows for `codes` out of one snapshot.
    ///
    /// Codes missing from the snapshot, or whose rate the spread rejects, are
    /// left off the board and listed in `skipped`.
    pub fn build_board(
        snapshot: &RateSnapshot,
        codes: &[CurrencyCode],
        spread: &SpreadPolicy,
    ) -> BoardSnapshot {
        let mut rows = Vec::with_capacity(codes.len());
        let mut skipped = Vec::new();

        for code in codes {
            let Some(mid) = snapshot.rate(code) else {
                warn!("{} returned no rate for {}, leaving it off the board", snapshot.source, code);
                skipped.push(code.clone());
                continue;
            };

            match spread.derive_row(code.clone(), mid) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!("Skipping {}: {}", code, e);
                    skipped.push(code.clone());
                }
            }
        }

        BoardSnapshot {
            base: snapshot.base.clone(),
            rows,
            skipped,
        }
    }
}

#[async_trait]
impl RateBoardServiceTrait for RateBoardService {
    async fn load_board(&self) -> Result<BoardSnapshot> {
        let snapshot = self.provider.latest_rates().await?;
        let board = Self::build_board(&snapshot, &self.settings.currencies, &self.settings.spread);
        debug!(
            "Loaded {} rows against {} from {} ({} skipped)",
            board.rows.len(),
            board.base,
            snapshot.source,
            board.skipped.len()
        );
        Ok(board)
    }

    async fn lookup_mid_rate(&self, code: &CurrencyCode) -> Result<Option<Decimal>> {
        match self.provider.latest_rate(code).await {
            Ok(rate) => Ok(Some(rate)),
            Err(MarketDataError::CurrencyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn spread(&self) -> &SpreadPolicy {
        &self.settings.spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use ratedesk_market_data::FixedRateProvider;
    use rust_decimal_macros::dec;

    fn provider() -> Arc<FixedRateProvider> {
        Arc::new(
            FixedRateProvider::new("USD")
                .with_rate("CAD", dec!(1.3500))
                .with_rate("EUR", dec!(0.9234))
                .with_rate("IDR", dec!(15712.5))
                .with_rate("JPY", dec!(150.12))
                .with_rate("CHF", dec!(0.8812))
                .with_rate("GBP", dec!(0.7921))
                .with_rate("AUD", dec!(1.5)),
        )
    }

    #[tokio::test]
    async fn test_load_board_default_currencies() {
        let service = RateBoardService::new(provider(), BoardSettings::default());

        let board = service.load_board().await.unwrap();

        assert_eq!(board.base.as_str(), "USD");
        assert!(board.skipped.is_empty());
        let codes: Vec<&str> = board.rows.iter().map(|r| r.currency_code.as_str()).collect();
        assert_eq!(codes, vec!["CAD", "EUR", "IDR", "JPY", "CHF", "GBP"]);

        let cad = &board.rows[0];
        assert_eq!(cad.buy_price.to_string(), "1.4175");
        assert_eq!(cad.mid_rate.to_string(), "1.3500");
        assert_eq!(cad.sell_price.to_string(), "1.2825");
    }

    #[tokio::test]
    async fn test_load_board_skips_missing_codes() {
        let provider = Arc::new(FixedRateProvider::new("USD").with_rate("EUR", dec!(0.92)));
        let service = RateBoardService::new(provider, BoardSettings::default());

        let board = service.load_board().await.unwrap();

        assert_eq!(board.rows.len(), 1);
        assert_eq!(board.rows[0].currency_code.as_str(), "EUR");
        let skipped: Vec<&str> = board.skipped.iter().map(|c| c.as_str()).collect();
        assert_eq!(skipped, vec!["CAD", "IDR", "JPY", "CHF", "GBP"]);
    }

    #[tokio::test]
    async fn test_load_board_skips_non_positive_rates() {
        let provider = provider();
        provider.set_rate("JPY", Decimal::ZERO);
        let service = RateBoardService::new(provider, BoardSettings::default());

        let board = service.load_board().await.unwrap();

        assert_eq!(board.rows.len(), 5);
        assert_eq!(board.skipped, vec![CurrencyCode::new("JPY")]);
    }

    #[tokio::test]
    async fn test_load_board_propagates_fetch_failure() {
        let provider = provider();
        provider.fail_with("boom");
        let service = RateBoardService::new(provider, BoardSettings::default());

        let result = service.load_board().await;

        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::ProviderError { .. }))
        ));
    }

    #[tokio::test]
    async fn test_lookup_known_and_unknown() {
        let provider = provider();
        let service = RateBoardService::new(provider.clone(), BoardSettings::default());

        let rate = service.lookup_mid_rate(&CurrencyCode::new("aud")).await.unwrap();
        assert_eq!(rate, Some(dec!(1.5)));

        let rate = service.lookup_mid_rate(&CurrencyCode::new("XYZ")).await.unwrap();
        assert_eq!(rate, None);

        // every lookup fetches the full set again
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_error() {
        let provider = provider();
        provider.fail_with("down");
        let service = RateBoardService::new(provider, BoardSettings::default());

        let result = service.lookup_mid_rate(&CurrencyCode::new("AUD")).await;
        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::ProviderError { .. }))
        ));
    }
}
