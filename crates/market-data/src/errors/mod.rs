//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers the three failure families a rate fetch can hit:
//! transport failures, responses that don't look like a rate table, and
//! currency codes the provider doesn't know about.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested currency code is not present in the provider's rate table.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider rejected the API credential (HTTP 401/403).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the credential
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body was not a rate table.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::CurrencyNotFound("XYZ".to_string());
        assert_eq!(format!("{}", error), "Currency not found: XYZ");

        let error = MarketDataError::RateLimited {
            provider: "CURRENCY_FREAKS".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: CURRENCY_FREAKS");

        let error = MarketDataError::ProviderError {
            provider: "CURRENCY_FREAKS".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: CURRENCY_FREAKS - HTTP 500"
        );
    }
}
