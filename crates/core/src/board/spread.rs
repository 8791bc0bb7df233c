use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::board_model::ExchangeRateRow;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use ratedesk_market_data::CurrencyCode;

/// Fixed percentage spread around the mid rate.
///
/// `buy = mid × (1 + buy_markup)`, `sell = mid × (1 - sell_markdown)`, every
/// value rounded half away from zero to `scale` fractional digits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPolicy {
    pub buy_markup: Decimal,
    pub sell_markdown: Decimal,
    pub scale: u32,
}

impl Default for SpreadPolicy {
    fn default() -> Self {
        Self {
            buy_markup: Decimal::new(5, 2),
            sell_markdown: Decimal::new(5, 2),
            scale: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl SpreadPolicy {
    pub fn new(buy_markup: Decimal, sell_markdown: Decimal) -> Result<Self> {
        if buy_markup.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "buy markup must not be negative, got {}",
                buy_markup
            )));
        }
        if sell_markdown.is_sign_negative() || sell_markdown >= Decimal::ONE {
            return Err(Error::InvalidConfigValue(format!(
                "sell markdown must be in [0, 1), got {}",
                sell_markdown
            )));
        }
        Ok(Self {
            buy_markup,
            sell_markdown,
            scale: DISPLAY_DECIMAL_PRECISION,
        })
    }

    /// Round to the display scale, padding so the value always carries
    /// exactly `scale` fractional digits.
    pub fn round(&self, value: Decimal) -> Decimal {
        let mut rounded =
            value.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.scale);
        rounded
    }

    /// Display form of a mid rate, e.g. `1.35` -> `"1.3500"`.
    pub fn format_rate(&self, mid: Decimal) -> String {
        self.round(mid).to_string()
    }

    pub fn buy_price(&self, mid: Decimal) -> Result<Decimal> {
        self.apply(mid, Decimal::ONE + self.buy_markup)
    }

    pub fn sell_price(&self, mid: Decimal) -> Result<Decimal> {
        self.apply(mid, Decimal::ONE - self.sell_markdown)
    }

    fn apply(&self, mid: Decimal, factor: Decimal) -> Result<Decimal> {
        mid.checked_mul(factor)
            .map(|v| self.round(v))
            .ok_or_else(|| Error::InvalidExchangeRate(format!("{} overflows", mid)))
    }

    /// Derive a full board row from one mid rate.
    ///
    /// Buy and sell are computed from the unrounded mid; only the results are
    /// rounded.
    pub fn derive_row(&self, currency_code: CurrencyCode, mid: Decimal) -> Result<ExchangeRateRow> {
        if mid <= Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "{} has non-positive rate {}",
                currency_code, mid
            )));
        }

        Ok(ExchangeRateRow {
            buy_price: self.buy_price(mid)?,
            mid_rate: self.round(mid),
            sell_price: self.sell_price(mid)?,
            currency_code,
        })
    }
}
