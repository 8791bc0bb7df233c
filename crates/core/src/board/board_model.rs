use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratedesk_market_data::CurrencyCode;

/// One line of the board: a currency with its buy, mid and sell quotes.
///
/// Prices always carry exactly four fractional digits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateRow {
    pub currency_code: CurrencyCode,
    pub buy_price: Decimal,
    pub mid_rate: Decimal,
    pub sell_price: Decimal,
}

impl ExchangeRateRow {
    /// Cells in column order: Currency, We Buy, Exchange Rate, We Sell.
    pub fn cells(&self) -> [String; 4] {
        [
            self.currency_code.to_string(),
            self.buy_price.to_string(),
            self.mid_rate.to_string(),
            self.sell_price.to_string(),
        ]
    }
}

/// Ordered rows of the board. Duplicated codes are allowed.
///
/// The first `loaded` rows come from the last board load; everything after
/// them was added by hand and survives reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    rows: Vec<ExchangeRateRow>,
    #[serde(skip)]
    loaded: usize,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table whose rows all count as loaded.
    pub fn from_rows(rows: Vec<ExchangeRateRow>) -> Self {
        let loaded = rows.len();
        Self { rows, loaded }
    }

    /// Swap in a freshly loaded board in place of the previously loaded rows.
    /// Rows appended with [`RateTable::push`] keep their order after them.
    pub fn replace_loaded(&mut self, rows: Vec<ExchangeRateRow>) {
        let loaded = rows.len();
        self.rows.splice(..self.loaded, rows);
        self.loaded = loaded;
    }

    /// Append a row at the end of the table.
    pub fn push(&mut self, row: ExchangeRateRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ExchangeRateRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExchangeRateRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of one board load.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Currency every mid rate is quoted against
    pub base: CurrencyCode,
    /// Rows for the configured codes, in configured order
    pub rows: Vec<ExchangeRateRow>,
    /// Configured codes that had no usable rate
    pub skipped: Vec<CurrencyCode>,
}
