//! Unit types and conversion constants
//!
//! Provides the unit categories, their unit lists and the scale factors used by
//! the linear converters.

use serde::{Deserialize, Serialize};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Temperature,
    Weight,
    Currency,
    Area,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Length,
        UnitCategory::Temperature,
        UnitCategory::Weight,
        UnitCategory::Currency,
        UnitCategory::Area,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Weight => "Weight",
            UnitCategory::Currency => "Currency",
            UnitCategory::Area => "Area",
        }
    }

    /// Parse from string (case insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Some(UnitCategory::Length),
            "temperature" | "temp" => Some(UnitCategory::Temperature),
            "weight" | "mass" => Some(UnitCategory::Weight),
            "currency" | "money" => Some(UnitCategory::Currency),
            "area" => Some(UnitCategory::Area),
            _ => None,
        }
    }

    /// Valid unit names for this category, in display order
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            UnitCategory::Length => LENGTH_FACTORS.units().collect(),
            UnitCategory::Weight => WEIGHT_FACTORS.units().collect(),
            UnitCategory::Area => AREA_FACTORS.units().collect(),
            UnitCategory::Temperature => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
            UnitCategory::Currency => SUPPORTED_CURRENCIES.to_vec(),
        }
    }

    /// Resolve a user-supplied unit name to its canonical spelling
    ///
    /// Matching ignores case and surrounding whitespace, so "Square Meters"
    /// resolves to "square meters" and "usd" to "USD".
    pub fn canonical_unit(&self, unit: &str) -> Option<&'static str> {
        let wanted = unit.trim();
        self.units()
            .into_iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Factor Tables
// ============================================================================

/// Mapping from unit name to how many base units equal one of that unit
#[derive(Debug)]
pub struct ConversionFactorTable {
    pub category: UnitCategory,
    pub base_unit: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl ConversionFactorTable {
    const fn new(
        category: UnitCategory,
        base_unit: &'static str,
        entries: &'static [(&'static str, f64)],
    ) -> Self {
        Self {
            category,
            base_unit,
            entries,
        }
    }

    /// Scale factor for an exact unit name
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }
}

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per kilometer
pub const M_PER_KM: f64 = 1000.0;
/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Meters per millimeter
pub const M_PER_MM: f64 = 0.001;
/// Meters per mile
pub const M_PER_MILE: f64 = 1609.34;
/// Meters per yard
pub const M_PER_YARD: f64 = 0.9144;
/// Meters per foot
pub const M_PER_FOOT: f64 = 0.3048;
/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;

pub static LENGTH_FACTORS: ConversionFactorTable = ConversionFactorTable::new(
    UnitCategory::Length,
    "meters",
    &[
        ("meters", 1.0),
        ("kilometers", M_PER_KM),
        ("centimeters", M_PER_CM),
        ("millimeters", M_PER_MM),
        ("miles", M_PER_MILE),
        ("yards", M_PER_YARD),
        ("feet", M_PER_FOOT),
        ("inches", M_PER_INCH),
    ],
);

// ============================================================================
// Weight Conversion Constants (to kilograms)
// ============================================================================

/// Kilograms per gram
pub const KG_PER_G: f64 = 0.001;
/// Kilograms per milligram
pub const KG_PER_MG: f64 = 1e-6;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Kilograms per ounce
pub const KG_PER_OZ: f64 = 0.0283495;
/// Kilograms per metric ton
pub const KG_PER_TON: f64 = 1000.0;

pub static WEIGHT_FACTORS: ConversionFactorTable = ConversionFactorTable::new(
    UnitCategory::Weight,
    "kilograms",
    &[
        ("kilograms", 1.0),
        ("grams", KG_PER_G),
        ("milligrams", KG_PER_MG),
        ("pounds", KG_PER_LB),
        ("ounces", KG_PER_OZ),
        ("tons", KG_PER_TON),
    ],
);

// ============================================================================
// Area Conversion Constants (to square meters)
// ============================================================================

/// Square meters per square kilometer
pub const SQ_M_PER_SQ_KM: f64 = 1e6;
/// Square meters per square mile
pub const SQ_M_PER_SQ_MILE: f64 = 2589988.11;
/// Square meters per acre
pub const SQ_M_PER_ACRE: f64 = 4046.86;
/// Square meters per hectare
pub const SQ_M_PER_HECTARE: f64 = 10000.0;

pub static AREA_FACTORS: ConversionFactorTable = ConversionFactorTable::new(
    UnitCategory::Area,
    "square meters",
    &[
        ("square meters", 1.0),
        ("square kilometers", SQ_M_PER_SQ_KM),
        ("square miles", SQ_M_PER_SQ_MILE),
        ("acres", SQ_M_PER_ACRE),
        ("hectares", SQ_M_PER_HECTARE),
    ],
);

// ============================================================================
// Temperature and Currency Units
// ============================================================================

/// Temperature scale; these are affine, so there is no factor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" => Some(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

/// Currency codes accepted by the currency converter
pub const SUPPORTED_CURRENCIES: [&str; 7] = ["USD", "EUR", "GBP", "JPY", "AUD", "CAD", "INR"];
