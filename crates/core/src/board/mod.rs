//! Rate board - fetching the configured currencies and pricing them.

mod board_model;
mod board_service;
mod board_traits;
mod spread;

pub use board_model::{BoardSnapshot, ExchangeRateRow, RateTable};
pub use board_service::RateBoardService;
pub use board_traits::RateBoardServiceTrait;
pub use spread::SpreadPolicy;
