//! Ratedesk Market Data Crate
//!
//! Provider-agnostic fetching of fiat exchange rate tables.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  RateProvider    | --> |  HTTP endpoint   | --> |  RateSnapshot    |
//! | (CurrencyFreaks) |     |  (JSON `rates`)  |     | (code -> mid)    |
//! +------------------+     +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateProvider`] - Trait implemented by every rate source
//! - [`RateSnapshot`] - One full rate table quoted against a base currency
//! - [`CurrencyCode`] - Upper-cased currency identifier
//! - [`MarketDataError`] - Transport, payload and lookup failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{parse_rate_value, CurrencyCode, RateSnapshot};
pub use provider::currency_freaks::{parse_latest_response, CurrencyFreaksProvider};
pub use provider::RateProvider;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::fixed::FixedRateProvider;
