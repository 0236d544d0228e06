//! Conversion Tools
//!
//! Tools for listing categories and converting values.

use serde::Serialize;

use crate::conversion::{self, CategoryInfo, ConversionError, UnitCategory};
use crate::currency::RateProvider;
use crate::models::{ConversionRecord, ConversionRecordCreate, Session};

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryInfo>,
    pub total: usize,
}

/// Input for convert_units
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub record: ConversionRecord,
    pub summary: String,
    pub history_len: usize,
}

pub fn list_categories() -> ListCategoriesResponse {
    let categories = conversion::list_categories();
    let total = categories.len();
    ListCategoriesResponse { categories, total }
}

/// A request whose category and units have been validated
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConversion {
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
}

/// Validate a request and canonicalize its names
///
/// Unit and category names are matched case-insensitively. Values must be
/// finite and non-negative.
pub fn resolve_request(request: &ConvertRequest) -> Result<ResolvedConversion, String> {
    if !request.value.is_finite() {
        return Err("Value must be a finite number".to_string());
    }
    if request.value < 0.0 {
        return Err(format!("Value cannot be negative, got {}", request.value));
    }

    let category = UnitCategory::from_str(&request.category).ok_or_else(|| {
        let known: Vec<&str> = UnitCategory::ALL.iter().map(|c| c.display_name()).collect();
        format!(
            "{}; expected one of: {}",
            ConversionError::UnknownCategory(request.category.clone()),
            known.join(", ")
        )
    })?;

    Ok(ResolvedConversion {
        category,
        value: request.value,
        from_unit: resolve_unit(category, &request.from_unit)?,
        to_unit: resolve_unit(category, &request.to_unit)?,
    })
}

impl ResolvedConversion {
    /// Run the conversion; may block on the exchange-rate service
    pub fn evaluate(&self, rates: &dyn RateProvider) -> Result<f64, String> {
        conversion::convert(self.category, self.value, self.from_unit, self.to_unit, rates)
            .map_err(|e| e.to_string())
    }
}

/// Append a finished conversion to the session history
pub fn record_conversion(
    session: &mut Session,
    conversion: ResolvedConversion,
    result: f64,
) -> ConvertResponse {
    tracing::info!(
        "Converted {} {} to {} {} ({})",
        conversion.value,
        conversion.from_unit,
        result,
        conversion.to_unit,
        conversion.category
    );

    let record = session
        .record(ConversionRecordCreate {
            category: conversion.category,
            value: conversion.value,
            from_unit: conversion.from_unit.to_string(),
            result,
            to_unit: conversion.to_unit.to_string(),
        })
        .clone();

    ConvertResponse {
        summary: record.summary(),
        record,
        history_len: session.history_len(),
    }
}

/// Convert a value and append it to the session history
///
/// Nothing is recorded when the conversion fails.
pub fn convert_units(
    session: &mut Session,
    rates: &dyn RateProvider,
    request: ConvertRequest,
) -> Result<ConvertResponse, String> {
    let conversion = resolve_request(&request)?;
    let result = conversion.evaluate(rates)?;
    Ok(record_conversion(session, conversion, result))
}

fn resolve_unit(category: UnitCategory, unit: &str) -> Result<&'static str, String> {
    category.canonical_unit(unit).ok_or_else(|| {
        format!(
            "{}; expected one of: {}",
            ConversionError::unknown_unit(unit, category),
            category.units().join(", ")
        )
    })
}
