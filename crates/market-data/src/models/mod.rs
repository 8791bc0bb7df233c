//! Market data models
//!
//! - `types` - Identifiers (CurrencyCode)
//! - `snapshot` - A provider's full rate table (RateSnapshot)

mod snapshot;
mod types;

pub use snapshot::{parse_rate_value, RateSnapshot};
pub use types::CurrencyCode;
