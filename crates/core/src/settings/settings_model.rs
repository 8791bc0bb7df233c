//! Board settings resolved at startup.

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::board::SpreadPolicy;
use crate::constants::{
    DEFAULT_BUY_MARKUP, DEFAULT_CURRENCIES, DEFAULT_LOOKUP_DEBOUNCE_MS, DEFAULT_SELL_MARKDOWN,
};
use crate::errors::{Error, Result};
use ratedesk_market_data::CurrencyCode;

pub const CURRENCIES_KEY: &str = "RATEDESK_CURRENCIES";
pub const LOOKUP_DEBOUNCE_KEY: &str = "RATEDESK_LOOKUP_DEBOUNCE_MS";
pub const BUY_MARKUP_KEY: &str = "RATEDESK_BUY_MARKUP";
pub const SELL_MARKDOWN_KEY: &str = "RATEDESK_SELL_MARKDOWN";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSettings {
    /// Codes loaded onto the board at startup, in display order
    pub currencies: Vec<CurrencyCode>,
    pub spread: SpreadPolicy,
    /// Quiet period before a draft lookup is sent
    pub lookup_debounce: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            currencies: DEFAULT_CURRENCIES.iter().map(CurrencyCode::new).collect(),
            spread: SpreadPolicy::default(),
            lookup_debounce: Duration::from_millis(DEFAULT_LOOKUP_DEBOUNCE_MS),
        }
    }
}

impl BoardSettings {
    /// Resolve settings through `lookup`, falling back to defaults for
    /// absent or blank keys.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let currencies = match get(CURRENCIES_KEY) {
            Some(raw) => {
                let codes = CurrencyCode::parse_list(&raw);
                if codes.is_empty() {
                    return Err(Error::InvalidConfigValue(format!(
                        "{} lists no currencies",
                        CURRENCIES_KEY
                    )));
                }
                codes
            }
            None => DEFAULT_CURRENCIES.iter().map(CurrencyCode::new).collect(),
        };

        let debounce_ms = match get(LOOKUP_DEBOUNCE_KEY) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", LOOKUP_DEBOUNCE_KEY, raw))
            })?,
            None => DEFAULT_LOOKUP_DEBOUNCE_MS,
        };

        let buy_markup = parse_fraction(get(BUY_MARKUP_KEY), BUY_MARKUP_KEY, DEFAULT_BUY_MARKUP)?;
        let sell_markdown =
            parse_fraction(get(SELL_MARKDOWN_KEY), SELL_MARKDOWN_KEY, DEFAULT_SELL_MARKDOWN)?;

        Ok(Self {
            currencies,
            spread: SpreadPolicy::new(buy_markup, sell_markdown)?,
            lookup_debounce: Duration::from_millis(debounce_ms),
        })
    }
}

fn parse_fraction(raw: Option<String>, key: &str, default: &str) -> Result<Decimal> {
    let raw = raw.unwrap_or_else(|| default.to_string());
    Decimal::from_str(raw.trim())
        .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = BoardSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, BoardSettings::default());

        let codes: Vec<&str> = settings.currencies.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["CAD", "EUR", "IDR", "JPY", "CHF", "GBP"]);
        assert_eq!(settings.lookup_debounce, Duration::from_millis(300));
        assert_eq!(settings.spread.buy_markup, dec!(0.05));
    }

    #[test]
    fn test_overrides() {
        let settings = BoardSettings::from_lookup(lookup(&[
            (CURRENCIES_KEY, "aud, nzd"),
            (LOOKUP_DEBOUNCE_KEY, "50"),
            (BUY_MARKUP_KEY, "0.02"),
            (SELL_MARKDOWN_KEY, "0.03"),
        ]))
        .unwrap();

        let codes: Vec<&str> = settings.currencies.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["AUD", "NZD"]);
        assert_eq!(settings.lookup_debounce, Duration::from_millis(50));
        assert_eq!(settings.spread.buy_markup, dec!(0.02));
        assert_eq!(settings.spread.sell_markdown, dec!(0.03));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let settings =
            BoardSettings::from_lookup(lookup(&[(CURRENCIES_KEY, "  "), (LOOKUP_DEBOUNCE_KEY, "")]))
                .unwrap();
        assert_eq!(settings, BoardSettings::default());
    }

    #[test]
    fn test_invalid_values() {
        let result = BoardSettings::from_lookup(lookup(&[(LOOKUP_DEBOUNCE_KEY, "soon")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));

        let result = BoardSettings::from_lookup(lookup(&[(CURRENCIES_KEY, ",,")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));

        let result = BoardSettings::from_lookup(lookup(&[(SELL_MARKDOWN_KEY, "1.5")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }
}
