//! Conversion error types

use thiserror::Error;

use super::units::UnitCategory;
use crate::currency::CurrencyError;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { unit: String, category: UnitCategory },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Currency conversion failed: {0}")]
    Currency(#[from] CurrencyError),
}

impl ConversionError {
    pub fn unknown_unit(unit: impl Into<String>, category: UnitCategory) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.into(),
            category,
        }
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
