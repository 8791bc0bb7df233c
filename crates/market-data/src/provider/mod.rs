//! Exchange rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all providers implement
//! - The CurrencyFreaks HTTP provider
//! - A static in-memory provider for tests (`test-utils` feature)

mod traits;

pub mod currency_freaks;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixed;

pub use traits::RateProvider;
