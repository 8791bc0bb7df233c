//! CurrencyFreaks API response models.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Body of the `latest` endpoint.
///
/// Rates are usually numeric strings, but numbers are accepted as well.
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
    pub rates: HashMap<String, Value>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}
