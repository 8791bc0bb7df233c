use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::CurrencyCode;

/// A full rate table as returned by a provider.
///
/// Every rate is the price of one unit of `base` in the keyed currency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Base currency the rates are quoted against (e.g. "USD")
    pub base: CurrencyCode,

    /// Provider-side date string, if the provider sends one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Mid rates keyed by upper-cased currency code
    pub rates: HashMap<String, Decimal>,

    /// Source of the snapshot (CURRENCY_FREAKS, STATIC, etc.)
    pub source: String,
}

impl RateSnapshot {
    /// Create a snapshot from already-parsed rates.
    pub fn new(
        base: CurrencyCode,
        date: Option<String>,
        rates: HashMap<String, Decimal>,
        source: String,
    ) -> Self {
        Self {
            base,
            date,
            rates,
            source,
        }
    }

    /// Build a snapshot from the raw JSON `rates` object.
    ///
    /// Values may be JSON numbers or numeric strings. Anything else is dropped.
    pub fn from_raw_rates(
        base: CurrencyCode,
        date: Option<String>,
        raw: HashMap<String, Value>,
        source: String,
    ) -> Self {
        let mut rates = HashMap::with_capacity(raw.len());
        for (code, value) in raw {
            match parse_rate_value(&value) {
                Some(rate) => {
                    rates.insert(code.trim().to_uppercase(), rate);
                }
                None => log::debug!("Skipping unparseable rate for {}: {}", code, value),
            }
        }
        Self::new(base, date, rates, source)
    }

    /// Mid rate for `code`, if the provider quoted it.
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Parses a single JSON rate value into a decimal.
pub fn parse_rate_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(Decimal::from(i));
            }
            parse_decimal_str(&n.to_string())
        }
        Value::String(s) => parse_decimal_str(s),
        _ => None,
    }
}

fn parse_decimal_str(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
