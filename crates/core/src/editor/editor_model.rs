use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratedesk_market_data::CurrencyCode;

/// Visibility of the add-currency dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Unconfirmed input of the add-currency form.
///
/// `mid_rate` is either empty or a rate formatted to the display scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub currency_code: String,
    pub mid_rate: String,
}

impl Draft {
    pub fn reset(&mut self) {
        self.currency_code.clear();
        self.mid_rate.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.currency_code.is_empty() && self.mid_rate.is_empty()
    }

    pub fn has_rate(&self) -> bool {
        !self.mid_rate.trim().is_empty()
    }
}

/// A lookup the editor wants performed for the current draft code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub token: u64,
    pub code: CurrencyCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Decimal),
    Unknown,
    Failed(String),
}

/// Answer to a [`LookupRequest`], carrying the request's token back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub token: u64,
    pub code: CurrencyCode,
    pub outcome: LookupOutcome,
}
