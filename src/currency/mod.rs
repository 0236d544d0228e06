//! Currency conversion module
//!
//! Converts amounts through a remote exchange-rate service.

pub mod client;
pub mod error;

pub use client::{parse_pair_response, ExchangeRateClient};
pub use error::{CurrencyError, CurrencyResult};

/// Source of currency conversions
///
/// Implementations may block; callers on an async runtime must move the call
/// onto a blocking thread.
pub trait RateProvider: Send + Sync {
    /// Convert `amount` from one currency code to another
    fn convert(&self, amount: f64, from: &str, to: &str) -> CurrencyResult<f64>;
}
