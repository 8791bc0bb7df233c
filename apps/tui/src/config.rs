use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use ratedesk_core::{BoardSettings, Error, Result};
use ratedesk_market_data::provider::currency_freaks::DEFAULT_BASE_URL;

const API_KEY_KEY: &str = "RATEDESK_API_KEY";
const API_URL_KEY: &str = "RATEDESK_API_URL";
const TIMEOUT_KEY: &str = "RATEDESK_REQUEST_TIMEOUT_SECS";
const LOG_FILE_KEY: &str = "RATEDESK_LOG_FILE";
const LOG_FORMAT_KEY: &str = "RATEDESK_LOG_FORMAT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILE: &str = "ratedesk.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
    pub log_format: LogFormat,
    pub board: BoardSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_KEY).ok_or_else(|| Error::MissingConfigKey(API_KEY_KEY.into()))?;

        let request_timeout = match get(TIMEOUT_KEY) {
            Some(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", TIMEOUT_KEY, raw))
            })?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_format = match get(LOG_FORMAT_KEY) {
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(raw) => {
                return Err(Error::InvalidConfigValue(format!(
                    "{}={}",
                    LOG_FORMAT_KEY, raw
                )))
            }
            None => LogFormat::Text,
        };

        Ok(Self {
            api_key,
            api_url: get(API_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout,
            log_file: PathBuf::from(get(LOG_FILE_KEY).unwrap_or_else(|| DEFAULT_LOG_FILE.into())),
            log_format,
            board: BoardSettings::from_lookup(&lookup)?,
        })
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("log_file", &self.log_file)
            .field("log_format", &self.log_format)
            .field("board", &self.board)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_requires_api_key() {
        let result = Config::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(Error::MissingConfigKey(key)) if key == API_KEY_KEY));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(API_KEY_KEY, "secret")])).unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_file, PathBuf::from("ratedesk.log"));
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.board, BoardSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_KEY, "secret"),
            (API_URL_KEY, "http://localhost:8080/latest"),
            (TIMEOUT_KEY, "5"),
            (LOG_FORMAT_KEY, "JSON"),
            ("RATEDESK_CURRENCIES", "aud"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/latest");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.board.currencies.len(), 1);
    }

    #[test]
    fn test_rejects_bad_values() {
        let result = Config::from_lookup(lookup(&[(API_KEY_KEY, "k"), (TIMEOUT_KEY, "-1")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));

        let result = Config::from_lookup(lookup(&[(API_KEY_KEY, "k"), (LOG_FORMAT_KEY, "xml")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[(API_KEY_KEY, "super-secret")])).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
