//! Currency error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("No exchange-rate API key configured (set UNIT_CONVERTER_API_KEY)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Exchange-rate service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Exchange-rate service reported an error: {0}")]
    Api(String),

    #[error("Malformed exchange-rate response: {0}")]
    InvalidResponse(String),

    #[error("Exchange-rate response is missing '{0}'")]
    MissingField(&'static str),
}

pub type CurrencyResult<T> = Result<T, CurrencyError>;
