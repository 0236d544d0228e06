//! Category registry
//!
//! Maps each category to its conversion strategy and dispatches conversions.

use serde::Serialize;

use super::converter::{convert_linear, convert_temperature_named};
use super::error::{ConversionError, ConversionResult};
use super::units::{ConversionFactorTable, UnitCategory, AREA_FACTORS, LENGTH_FACTORS, WEIGHT_FACTORS};
use crate::currency::RateProvider;

/// How a category converts values
#[derive(Debug, Clone, Copy)]
pub enum Converter {
    /// Scale through a factor table
    Linear(&'static ConversionFactorTable),
    /// Scale and offset through Celsius
    Affine,
    /// Remote exchange-rate lookup
    Currency,
}

impl UnitCategory {
    pub fn converter(&self) -> Converter {
        match self {
            UnitCategory::Length => Converter::Linear(&LENGTH_FACTORS),
            UnitCategory::Weight => Converter::Linear(&WEIGHT_FACTORS),
            UnitCategory::Area => Converter::Linear(&AREA_FACTORS),
            UnitCategory::Temperature => Converter::Affine,
            UnitCategory::Currency => Converter::Currency,
        }
    }

    /// Whether converting in this category leaves the process
    pub fn requires_network(&self) -> bool {
        matches!(self.converter(), Converter::Currency)
    }
}

/// Convert a value within a category
///
/// Unit names must be canonical (see [`UnitCategory::canonical_unit`]).
/// Only the currency category touches `rates`.
pub fn convert(
    category: UnitCategory,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    rates: &dyn RateProvider,
) -> ConversionResult<f64> {
    match category.converter() {
        Converter::Linear(table) => convert_linear(value, from_unit, to_unit, table),
        Converter::Affine => {
            require_canonical(category, from_unit, to_unit)?;
            convert_temperature_named(value, from_unit, to_unit)
        }
        Converter::Currency => {
            require_canonical(category, from_unit, to_unit)?;
            if from_unit == to_unit {
                return Ok(value);
            }
            Ok(rates.convert(value, from_unit, to_unit)?)
        }
    }
}

/// Reject names that are not spelled exactly as in the category's unit list
fn require_canonical(category: UnitCategory, from_unit: &str, to_unit: &str) -> ConversionResult<()> {
    for unit in [from_unit, to_unit] {
        if category.canonical_unit(unit) != Some(unit) {
            return Err(ConversionError::unknown_unit(unit, category));
        }
    }
    Ok(())
}

/// Category entry for listing
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub units: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<&'static str>,
    pub requires_network: bool,
}

impl From<UnitCategory> for CategoryInfo {
    fn from(category: UnitCategory) -> Self {
        let base_unit = match category.converter() {
            Converter::Linear(table) => Some(table.base_unit),
            Converter::Affine | Converter::Currency => None,
        };
        Self {
            name: category.display_name(),
            units: category.units(),
            base_unit,
            requires_network: category.requires_network(),
        }
    }
}

/// All categories with their unit lists, in display order
pub fn list_categories() -> Vec<CategoryInfo> {
    UnitCategory::ALL.into_iter().map(CategoryInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{CurrencyError, CurrencyResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed-rate provider counting the calls it receives
    struct FixedRate {
        rate: f64,
        calls: AtomicUsize,
    }

    impl RateProvider for FixedRate {
        fn convert(&self, amount: f64, _from: &str, _to: &str) -> CurrencyResult<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(amount * self.rate)
        }
    }

    struct Unreachable;

    impl RateProvider for Unreachable {
        fn convert(&self, _amount: f64, _from: &str, _to: &str) -> CurrencyResult<f64> {
            Err(CurrencyError::MissingField("conversion_result"))
        }
    }

    #[test]
    fn test_dispatch_by_category() {
        let rates = Unreachable;
        assert_eq!(convert(UnitCategory::Length, 1.0, "kilometers", "meters", &rates).unwrap(), 1000.0);
        assert_eq!(convert(UnitCategory::Temperature, 100.0, "celsius", "fahrenheit", &rates).unwrap(), 212.0);
        assert_eq!(convert(UnitCategory::Weight, 1000.0, "grams", "kilograms", &rates).unwrap(), 1.0);
        assert_eq!(convert(UnitCategory::Area, 1.0, "hectares", "square meters", &rates).unwrap(), 10000.0);
    }

    #[test]
    fn test_identity_for_every_unit() {
        let rates = Unreachable;
        let value = 42.125;
        for category in UnitCategory::ALL {
            for unit in category.units() {
                assert_eq!(convert(category, value, unit, unit, &rates).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_cross_category_unit_rejected() {
        let rates = Unreachable;
        let err = convert(UnitCategory::Length, 1.0, "grams", "meters", &rates).unwrap_err();
        assert!(err.to_string().contains("grams"));
        assert!(err.to_string().contains("Length"));
    }

    #[test]
    fn test_non_canonical_names_rejected_in_every_category() {
        let rates = FixedRate { rate: 1.0, calls: AtomicUsize::new(0) };
        let cases = [
            (UnitCategory::Temperature, "c", "kelvin"),
            (UnitCategory::Temperature, "celsius", "K"),
            (UnitCategory::Currency, "usd", "EUR"),
            (UnitCategory::Length, "Meters", "feet"),
        ];
        for (category, from, to) in cases {
            let err = convert(category, 1.0, from, to, &rates).unwrap_err();
            assert!(matches!(err, ConversionError::UnknownUnit { .. }), "{} accepted {} -> {}", category, from, to);
        }
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_currency_uses_provider() {
        let rates = FixedRate { rate: 0.5, calls: AtomicUsize::new(0) };
        assert_eq!(convert(UnitCategory::Currency, 10.0, "USD", "EUR", &rates).unwrap(), 5.0);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_currency_rejects_unsupported_code_before_network() {
        let rates = FixedRate { rate: 1.0, calls: AtomicUsize::new(0) };
        let err = convert(UnitCategory::Currency, 10.0, "USD", "CHF", &rates).unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_currency_failure_is_an_error_not_zero() {
        let err = convert(UnitCategory::Currency, 10.0, "USD", "EUR", &Unreachable).unwrap_err();
        assert!(matches!(err, ConversionError::Currency(_)));
    }

    #[test]
    fn test_list_categories() {
        let categories = list_categories();
        let names: Vec<_> = categories.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Length", "Temperature", "Weight", "Currency", "Area"]);
        assert_eq!(categories[0].base_unit, Some("meters"));
        assert_eq!(categories[1].base_unit, None);
        assert!(categories[3].requires_network);
    }
}
