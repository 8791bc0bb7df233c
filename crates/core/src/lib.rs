//! Ratedesk Core - the rate board and its add-currency editor.
//!
//! This crate holds everything between the rate provider and the screen:
//! spread derivation, the ordered rate table, the service that loads the
//! configured currencies, and the row editor with its stale-lookup guard.
//! It does no rendering and no terminal I/O.

pub mod board;
pub mod constants;
pub mod editor;
pub mod errors;
pub mod settings;

pub use board::{
    BoardSnapshot, ExchangeRateRow, RateBoardService, RateBoardServiceTrait, RateTable,
    SpreadPolicy,
};
pub use editor::{LookupGate, LookupRequest, LookupResponse, RowEditor, RowEditorError};
pub use settings::BoardSettings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
