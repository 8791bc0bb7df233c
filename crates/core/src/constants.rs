/// Currencies shown on the board when none are configured
pub const DEFAULT_CURRENCIES: [&str; 6] = ["CAD", "EUR", "IDR", "JPY", "CHF", "GBP"];

/// Fractional digits of every displayed rate
pub const DISPLAY_DECIMAL_PRECISION: u32 = 4;

/// Markup applied to the mid rate for the "We Buy" column, as a fraction
pub const DEFAULT_BUY_MARKUP: &str = "0.05";

/// Markdown applied to the mid rate for the "We Sell" column, as a fraction
pub const DEFAULT_SELL_MARKDOWN: &str = "0.05";

/// Quiet period before a draft lookup hits the network, in milliseconds
pub const DEFAULT_LOOKUP_DEBOUNCE_MS: u64 = 300;
